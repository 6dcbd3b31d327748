//! State model of the user generator component.
//!
//! The generator holds four independent flags: the last received user, the
//! error flag, the loading flag and the visibility of the "thank you"
//! overlay.  Front ends own one `Generator`, run the network work elsewhere,
//! and feed outcomes back through [`Generator::complete`] and
//! [`Generator::dismiss`].

use std::{fmt, sync::Arc};

use crate::model::UserRecord;

/// Sequence number of one fetch cycle.  Only the latest ticket is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

/// Sequence number of one appreciation.  Only the latest token may hide the
/// overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ThankYouToken(u64);

#[derive(Clone, Debug, PartialEq)]
pub enum View {
    /// No user was ever received, nothing is drawn.
    Hidden,
    Loading,
    Error,
    Card {
        user: Arc<UserRecord>,
        thank_you: bool,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Generator {
    user: Option<Arc<UserRecord>>,
    error: bool,
    loading: bool,
    thank_you: bool,
    received_any: bool,
    keep_user_on_error: bool,
    last_ticket: FetchTicket,
    last_token: ThankYouToken,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Generator {
    pub fn new(keep_user_on_error: bool) -> Self {
        Self {
            user: None,
            error: false,
            loading: false,
            thank_you: false,
            received_any: false,
            keep_user_on_error,
            last_ticket: FetchTicket::default(),
            last_token: ThankYouToken::default(),
        }
    }

    pub fn user(&self) -> Option<&Arc<UserRecord>> {
        self.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_error(&self) -> bool {
        self.error
    }

    pub fn is_thank_you_visible(&self) -> bool {
        self.thank_you
    }

    /// Start a fetch cycle.  The caller performs the request and hands the
    /// outcome to `complete` together with the returned ticket.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.last_ticket = FetchTicket(self.last_ticket.0 + 1);
        self.loading = true;
        self.error = false;
        self.last_ticket
    }

    /// Apply the outcome of a fetch cycle.  Returns `false` if a newer cycle
    /// was started in the meantime and the outcome was dropped.
    pub fn complete<E: fmt::Display>(
        &mut self,
        ticket: FetchTicket,
        result: Result<Arc<UserRecord>, E>,
    ) -> bool {
        if ticket != self.last_ticket {
            log::debug!("dropping stale fetch {:?}, latest is {:?}", ticket, self.last_ticket);
            return false;
        }
        match result {
            Ok(user) => {
                self.user = Some(user);
                self.received_any = true;
            }
            Err(err) => {
                log::warn!("failed to fetch user: {err}");
                self.error = true;
                if !self.keep_user_on_error {
                    self.user = None;
                }
            }
        }
        self.loading = false;
        true
    }

    /// Show the overlay.  The caller schedules `dismiss` with the returned
    /// token after the configured delay.
    pub fn appreciate(&mut self) -> ThankYouToken {
        self.last_token = ThankYouToken(self.last_token.0 + 1);
        self.thank_you = true;
        self.last_token
    }

    /// Hide the overlay, unless it was shown again after `token` was issued.
    pub fn dismiss(&mut self, token: ThankYouToken) -> bool {
        if token != self.last_token {
            return false;
        }
        self.thank_you = false;
        true
    }

    /// Whether anything is drawn at all.
    pub fn is_visible(&self) -> bool {
        self.received_any
    }

    pub fn generate_label(&self) -> &'static str {
        if self.loading {
            crate::card::LOADING_LABEL
        } else {
            crate::card::GENERATE_LABEL
        }
    }

    pub fn view(&self) -> View {
        if !self.received_any {
            View::Hidden
        } else if self.loading {
            View::Loading
        } else if self.error {
            View::Error
        } else {
            match &self.user {
                Some(user) => View::Card {
                    user: user.clone(),
                    thank_you: self.thank_you,
                },
                None => View::Error,
            }
        }
    }
}
