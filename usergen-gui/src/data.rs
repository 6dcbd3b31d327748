use std::{sync::Arc, time::Duration};

use druid::{Data, Lens};
use usergen_core::{
    card::CardText,
    config::Config,
    generator::{Generator, View},
};

#[derive(Clone, Data, Lens)]
pub struct AppState {
    #[data(same_fn = "PartialEq::eq")]
    pub generator: Generator,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            generator: Generator::new(config.keep_user_on_error),
            config: Arc::new(config),
        }
    }

    pub fn thank_you_duration(&self) -> Duration {
        self.config.thank_you_duration()
    }

    pub fn view_kind(&self) -> ViewKind {
        match self.generator.view() {
            View::Hidden => ViewKind::Hidden,
            View::Loading => ViewKind::Loading,
            View::Error => ViewKind::Error,
            View::Card { .. } => ViewKind::Card,
        }
    }

    pub fn card(&self) -> Option<Card> {
        match self.generator.view() {
            View::Card { user, thank_you } => Some(Card {
                text: CardText::from_record(&user),
                thank_you,
            }),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Data)]
pub enum ViewKind {
    Hidden,
    Loading,
    Error,
    Card,
}

#[derive(Clone, Debug, Data, Lens)]
pub struct Card {
    #[data(same_fn = "PartialEq::eq")]
    pub text: CardText,
    pub thank_you: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use usergen_core::model::{Location, Login, Name, Picture, UserRecord};

    fn jane() -> Arc<UserRecord> {
        Arc::new(UserRecord {
            gender: "female".into(),
            name: Name {
                first: "Jane".into(),
                last: "Doe".into(),
            },
            email: "jane@x.com".into(),
            location: Location {
                city: "Linz".into(),
                state: "Upper Austria".into(),
                country: "Austria".into(),
            },
            login: Login {
                md5: "abc123".into(),
            },
            cell: "+43 000".into(),
            picture: Picture {
                large: "http://x/img.jpg".into(),
            },
        })
    }

    #[test]
    fn card_is_only_built_for_loaded_view() {
        let mut state = AppState::new(Config::default());
        let ticket = state.generator.begin_fetch();
        assert_eq!(state.view_kind(), ViewKind::Hidden);
        assert!(state.card().is_none());

        state.generator.complete(ticket, Ok::<_, String>(jane()));
        assert_eq!(state.view_kind(), ViewKind::Card);
        let card = state.card().unwrap();
        assert_eq!(card.text.name, "Jane Doe");
        assert_eq!(card.text.picture, "http://x/img.jpg");
        assert!(!card.thank_you);

        state.generator.appreciate();
        assert!(state.card().unwrap().thank_you);

        state.generator.begin_fetch();
        assert_eq!(state.view_kind(), ViewKind::Loading);
        assert!(state.card().is_none());
    }

    #[test]
    fn overlay_duration_comes_from_config() {
        let state = AppState::new(Config {
            thank_you_millis: 750,
            ..Config::default()
        });
        assert_eq!(state.thank_you_duration(), Duration::from_millis(750));
    }
}
