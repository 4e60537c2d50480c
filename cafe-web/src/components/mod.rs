pub mod delivery_banner;
pub mod footer;
pub mod header;
pub mod menu_item_card;
pub mod menu_section;
pub mod toast;
