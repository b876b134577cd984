//! Showcase section pages, one per component family.

mod buttons;
mod cards;
mod dialogs;
mod home;
mod navigation;
mod radio_buttons;
mod search;
mod switches;

pub use buttons::ButtonsPage;
pub use cards::CardsPage;
pub use dialogs::DialogsPage;
pub use home::HomePage;
pub use navigation::NavigationPage;
pub use radio_buttons::RadioButtonsPage;
pub use search::SearchPage;
pub use switches::SwitchesPage;
