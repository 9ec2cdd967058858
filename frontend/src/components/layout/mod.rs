pub mod card_grid;
pub mod nav;
