//! Configuration sections.
//!
//! | Section    | Purpose                                            |
//! |------------|----------------------------------------------------|
//! | `[site]`   | Site name, default description, base URL, root     |
//! | `[plugin]` | Tag defaults, enable switches, merge behaviour     |

mod plugin;
mod site;

pub use plugin::PluginSectionConfig;
pub use site::SiteSectionConfig;
