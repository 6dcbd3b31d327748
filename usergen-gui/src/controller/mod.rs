mod generate;
mod thank_you;

pub use generate::GenerateController;
pub use thank_you::ThankYouController;
