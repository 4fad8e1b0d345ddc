pub mod config_helper;
pub mod issue_labels;
