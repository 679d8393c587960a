pub mod create;
pub mod frontmatter;
pub mod layout;
pub mod list;
pub mod scan;
pub mod search;
pub mod slug;
pub mod template;
pub mod types;
