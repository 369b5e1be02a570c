// One interactive session: mode menu, then search or suggestions
// Produces the ID to play, or nothing

use ratatui::backend::Backend;
use tracing::debug;

use super::keys::KeySource;
use super::menu::navigate;
use super::screen::{Row, Screen, BODY_ROW, LIST_ROW};
use super::search::search_screen;
use super::UiError;
use crate::catalog::{self, CatalogEntry};
use crate::mode::{ModeProfile, CATALOG_OPTION};
use crate::youtube::extractor::SearchProvider;

pub struct PlayerApp<B: Backend, K, P> {
    screen: Screen<B>,
    keys: K,
    provider: P,
    profile: ModeProfile,
}

impl<B, K, P> PlayerApp<B, K, P>
where
    B: Backend,
    K: KeySource,
    P: SearchProvider,
{
    pub fn new(screen: Screen<B>, keys: K, provider: P, profile: ModeProfile) -> Self {
        PlayerApp {
            screen,
            keys,
            provider,
            profile,
        }
    }

    pub fn screen(&self) -> &Screen<B> {
        &self.screen
    }

    pub async fn run(&mut self) -> Result<Option<String>, UiError> {
        let options = self.profile.menu_options();
        let choice = navigate(&mut self.screen, &mut self.keys, &[], &options, BODY_ROW)?;
        debug!(mode = self.profile.name, choice = %options[choice], "mode picked");

        match self.profile.catalog {
            Some(entries) if options[choice] == CATALOG_OPTION => {
                self.pick_suggestion(entries).map(Some)
            }
            _ => {
                search_screen(
                    &mut self.screen,
                    &mut self.keys,
                    &self.provider,
                    &self.profile.search,
                )
                .await
            }
        }
    }

    fn pick_suggestion(&mut self, entries: &[CatalogEntry]) -> Result<String, UiError> {
        let caption = [Row::plain(BODY_ROW, "Pick a track from Suggestions:")];
        let titles = catalog::titles(entries);
        let index = navigate(&mut self.screen, &mut self.keys, &caption, &titles, LIST_ROW)?;
        Ok(entries[index].id.to_string())
    }
}
