use std::{io, io::BufRead, sync::Arc, thread, time::Duration};

use crossbeam_channel::{unbounded, Sender};
use usergen_core::{
    card::{CardText, APPRECIATE_LABEL, ERROR_MESSAGE, HEADING, THANK_YOU},
    config::Config,
    error::Error,
    generator::{FetchTicket, Generator, ThankYouToken, View},
    model::UserRecord,
    webapi::WebApi,
};

enum Event {
    Generate,
    Appreciate,
    Quit,
    Fetched(FetchTicket, Result<UserRecord, Error>),
    ThankYouElapsed(ThankYouToken),
}

fn main() {
    env_logger::init();

    let config = Config::load().unwrap_or_default();
    let api = Arc::new(WebApi::from_config(&config));
    log::info!("using {}", api.api_url());

    let (sender, receiver) = unbounded();

    let _input_thread = thread::spawn({
        let sender = sender.clone();
        move || {
            for line in io::stdin().lock().lines() {
                let event = match line.as_ref().map(|s| s.trim()) {
                    Ok("g") => Event::Generate,
                    Ok("a") => Event::Appreciate,
                    Ok("q") | Err(_) => Event::Quit,
                    _ => {
                        log::warn!("unknown command, use g, a or q");
                        continue;
                    }
                };
                if sender.send(event).is_err() {
                    break;
                }
            }
            let _ = sender.send(Event::Quit);
        }
    });

    let mut generator = Generator::new(config.keep_user_on_error);
    let mut shown = String::new();

    // Mount.
    spawn_fetch(&api, &sender, generator.begin_fetch());

    for event in receiver {
        match handle(&mut generator, event) {
            Effect::Fetch(ticket) => spawn_fetch(&api, &sender, ticket),
            Effect::Dismiss(token) => {
                spawn_dismiss(sender.clone(), token, config.thank_you_duration())
            }
            Effect::Render => {}
            Effect::Quit => break,
        }
        let rendered = render(&generator);
        if rendered != shown {
            println!("{rendered}");
            shown = rendered;
        }
    }
}

/// Follow-up work the main loop runs after an event was applied.
#[derive(Debug, PartialEq)]
enum Effect {
    Fetch(FetchTicket),
    Dismiss(ThankYouToken),
    Render,
    Quit,
}

fn handle(generator: &mut Generator, event: Event) -> Effect {
    match event {
        // The buttons are not drawn until the first user arrives.
        Event::Generate | Event::Appreciate if !generator.is_visible() => {
            log::debug!("ignoring command, nothing is shown yet");
            Effect::Render
        }
        Event::Generate => Effect::Fetch(generator.begin_fetch()),
        Event::Appreciate => Effect::Dismiss(generator.appreciate()),
        Event::Fetched(ticket, result) => {
            generator.complete(ticket, result.map(Arc::new));
            Effect::Render
        }
        Event::ThankYouElapsed(token) => {
            generator.dismiss(token);
            Effect::Render
        }
        Event::Quit => Effect::Quit,
    }
}

fn spawn_fetch(api: &Arc<WebApi>, sender: &Sender<Event>, ticket: FetchTicket) {
    let api = api.clone();
    let sender = sender.clone();
    thread::spawn(move || {
        let result = api.get_random_user();
        let _ = sender.send(Event::Fetched(ticket, result));
    });
}

fn spawn_dismiss(sender: Sender<Event>, token: ThankYouToken, delay: Duration) {
    thread::spawn(move || {
        thread::sleep(delay);
        let _ = sender.send(Event::ThankYouElapsed(token));
    });
}

fn render(generator: &Generator) -> String {
    let body = match generator.view() {
        View::Hidden => return String::new(),
        View::Loading => "...".to_string(),
        View::Error => ERROR_MESSAGE.to_string(),
        View::Card { user, thank_you } => {
            let card = CardText::from_record(&user);
            if thank_you {
                format!("{card}\n\n  *** {THANK_YOU} ***")
            } else {
                card.to_string()
            }
        }
    };
    format!(
        "== {HEADING} ==\n[{}]\n\n{body}\n\n[{APPRECIATE_LABEL}]",
        generator.generate_label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use usergen_core::model::{Location, Login, Name, Picture};

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

    fn shown() -> Generator {
        let mut generator = Generator::default();
        let ticket = generator.begin_fetch();
        generator.complete(ticket, Ok::<_, Error>(jane()));
        generator
    }

    #[test]
    fn commands_are_ignored_while_hidden() {
        let mut generator = Generator::default();
        generator.begin_fetch();
        let before = generator.clone();

        assert_eq!(handle(&mut generator, Event::Generate), Effect::Render);
        assert_eq!(handle(&mut generator, Event::Appreciate), Effect::Render);
        assert_eq!(generator, before);
        assert!(!generator.is_thank_you_visible());
    }

    #[test]
    fn commands_apply_once_shown() {
        let mut generator = shown();
        assert!(matches!(
            handle(&mut generator, Event::Generate),
            Effect::Fetch(_)
        ));
        assert!(generator.is_loading());
        assert!(matches!(
            handle(&mut generator, Event::Appreciate),
            Effect::Dismiss(_)
        ));
        assert!(generator.is_thank_you_visible());
        assert_eq!(handle(&mut generator, Event::Quit), Effect::Quit);
    }

    #[test]
    fn dismiss_timer_hides_overlay() {
        let mut generator = shown();
        let (sender, receiver) = unbounded();

        let Effect::Dismiss(token) = handle(&mut generator, Event::Appreciate) else {
            panic!("expected a dismiss timer");
        };
        spawn_dismiss(sender, token, Duration::from_millis(10));
        assert!(render(&generator).contains(THANK_YOU));

        let event = receiver.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(matches!(event, Event::ThankYouElapsed(t) if t == token));
        assert_eq!(handle(&mut generator, event), Effect::Render);
        assert!(!generator.is_thank_you_visible());
        assert!(!render(&generator).contains(THANK_YOU));
    }

    #[test]
    fn renders_nothing_until_first_user() {
        let mut generator = Generator::default();
        generator.begin_fetch();
        assert_eq!(render(&generator), "");
    }

    #[test]
    fn renders_card_then_loading() {
        let mut generator = Generator::default();
        let ticket = generator.begin_fetch();
        generator.complete(ticket, Ok::<_, Error>(jane()));

        let out = render(&generator);
        assert!(out.contains("[Generate New User]"));
        assert!(out.contains("Jane Doe"));
        assert!(out.contains("[Appreciate Now]"));
        assert!(!out.contains(THANK_YOU));

        generator.appreciate();
        assert!(render(&generator).contains(THANK_YOU));

        generator.begin_fetch();
        let out = render(&generator);
        assert!(out.contains("[...loading]"));
        assert!(!out.contains("Jane Doe"));
    }

    #[test]
    fn renders_error_message() {
        let mut generator = Generator::default();
        let ticket = generator.begin_fetch();
        generator.complete(ticket, Ok::<_, Error>(jane()));
        let ticket = generator.begin_fetch();
        generator.complete(ticket, Err::<Arc<UserRecord>, _>(Error::UnexpectedStatus(500)));
        assert!(render(&generator).contains(ERROR_MESSAGE));
    }
}
