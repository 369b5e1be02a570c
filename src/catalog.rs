// Hand-picked suggestions for the music mode

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub title: &'static str,
    pub id: &'static str,
}

pub const SUGGESTED: [CatalogEntry; 6] = [
    CatalogEntry { title: "Po twojej pysznej zupie", id: "3VizXab7XE0" },
    CatalogEntry { title: "Kibel", id: "n1qxMA7miyk" },
    CatalogEntry { title: "Babka najlepsza jest przez duże B", id: "JG1_B_nVBCg" },
    CatalogEntry { title: "Hehe papież tańczy", id: "2yusdx60_aw" },
    CatalogEntry { title: "Dyche daj robotowi", id: "JPveQux2WWo" },
    // Listed as "WaymcVmJ-A" in older notes; this 11-character id is what gets played
    CatalogEntry { title: "Macarena", id: "zWaymcVmJ-A" },
];

pub fn titles(entries: &[CatalogEntry]) -> Vec<String> {
    entries.iter().map(|entry| entry.title.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_keep_their_order() {
        let titles = titles(&SUGGESTED);
        assert_eq!(titles.len(), 6);
        assert_eq!(titles[0], "Po twojej pysznej zupie");
        assert_eq!(titles[5], "Macarena");
    }

    #[test]
    fn ids_look_like_youtube_ids() {
        for entry in SUGGESTED {
            assert_eq!(entry.id.len(), 11, "{}", entry.title);
        }
        assert_eq!(SUGGESTED[5].id, "zWaymcVmJ-A");
    }
}
