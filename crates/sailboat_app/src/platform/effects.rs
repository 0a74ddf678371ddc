use sailboat_core::{Effect, Msg};
use sailboat_engine::{extract, PageLoader};
use sailboat_logging::{sail_debug, sail_info};

use super::input::SearchInput;

/// Carries out the effects `update` asks for and reports back as messages.
pub struct EffectRunner {
    loader: PageLoader,
}

impl EffectRunner {
    pub fn new(loader: PageLoader) -> Self {
        Self { loader }
    }

    /// Loads run to completion before this returns; the UI is redrawn by the
    /// caller beforehand so the submitted query stays visible meanwhile.
    pub fn run(&self, effects: Vec<Effect>, input: &mut SearchInput) -> Vec<Msg> {
        let mut replies = Vec::new();
        for effect in effects {
            match effect {
                Effect::Load { query } => {
                    sail_info!("Load query={}", query);
                    let content = self.loader.search(&query);
                    let page = extract(&content);
                    sail_debug!("page ready with {} elements", page.len());
                    replies.push(Msg::PageLoaded(page));
                }
                Effect::FocusSearch => input.clear(),
                Effect::Shutdown => sail_info!("Shutdown requested"),
            }
        }
        replies
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sailboat_core::{DisplayElement, Effect, Msg};
    use sailboat_engine::{FetchSettings, PageLoader};

    use super::EffectRunner;
    use crate::platform::input::SearchInput;

    fn runner() -> EffectRunner {
        EffectRunner::new(PageLoader::new(FetchSettings::default()).unwrap())
    }

    #[test]
    fn load_reads_a_local_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        std::fs::write(
            &path,
            "<html><head><title>Local</title></head><body><p>Hi</p></body></html>",
        )
        .unwrap();

        let replies = runner().run(
            vec![Effect::Load {
                query: path.display().to_string(),
            }],
            &mut SearchInput::default(),
        );

        assert_eq!(
            replies,
            vec![Msg::PageLoaded(vec![
                DisplayElement::Title {
                    text: "Local".to_string()
                },
                DisplayElement::text("Hi"),
            ])]
        );
    }

    #[test]
    fn load_failure_becomes_an_error_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "plain").unwrap();
        let query = path.display().to_string();

        let replies = runner().run(
            vec![Effect::Load {
                query: query.clone(),
            }],
            &mut SearchInput::default(),
        );

        assert_eq!(
            replies,
            vec![Msg::PageLoaded(vec![DisplayElement::error(format!(
                "'{query}' is not a valid path to an HTML file."
            ))])]
        );
    }

    #[test]
    fn focus_search_clears_the_input() {
        let mut input = SearchInput::default();
        input.set_value("example.com");

        let replies = runner().run(vec![Effect::FocusSearch, Effect::Shutdown], &mut input);

        assert!(replies.is_empty());
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
    }
}
