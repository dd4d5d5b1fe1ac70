mod anchor;

pub use anchor::heading_anchor;
