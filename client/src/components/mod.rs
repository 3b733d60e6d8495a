//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render panels, dialogs and lists for the pages. Data arrives as
//! props or through the page's state signal; network calls stay in pages and
//! in the list components that own their own fetch cycle.

pub mod bombona_form;
pub mod dialogs;
pub mod map_panel;
pub mod movement_list;
pub mod nav_bar;
pub mod read_feed;
pub mod rfid_row;
pub mod stats_panel;
pub mod unlinked_rfid_list;
