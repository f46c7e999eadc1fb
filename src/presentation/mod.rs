mod result_card;
mod stats_view;

pub use result_card::{render_card, render_header, truncate_description, visible_terms};
pub use stats_view::render_stats;
