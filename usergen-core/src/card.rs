use std::fmt;

use crate::model::UserRecord;

pub const HEADING: &str = "RANDOM USER GENERATOR";
pub const GENERATE_LABEL: &str = "Generate New User";
pub const LOADING_LABEL: &str = "...loading";
pub const APPRECIATE_LABEL: &str = "Appreciate Now";
pub const THANK_YOU: &str = "Thank you";
pub const ERROR_MESSAGE: &str = "Error: Could not fetch user data";

/// Display strings of one user card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardText {
    pub picture: String,
    pub name: String,
    pub gender: String,
    pub email: String,
    pub location: String,
    pub login: String,
    pub phone: String,
}

impl CardText {
    pub fn from_record(user: &UserRecord) -> Self {
        Self {
            picture: user.picture.large.clone(),
            name: user.full_name(),
            gender: capitalize(&user.gender),
            email: user.email.clone(),
            location: user.location_line(),
            login: user.login.md5.clone(),
            phone: user.cell.clone(),
        }
    }
}

impl fmt::Display for CardText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "  {}", self.gender)?;
        writeln!(f, "  mail:     {}", self.email)?;
        writeln!(f, "  location: {}", self.location)?;
        writeln!(f, "  login:    {}", self.login)?;
        writeln!(f, "  phone:    {}", self.phone)?;
        write!(f, "  picture:  {}", self.picture)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
