// Domain layer - Display structures for the dashboard page
pub mod card;
pub mod figure;
pub mod layout;
