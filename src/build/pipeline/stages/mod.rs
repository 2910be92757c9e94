//! Default pipeline stages.
//!
//! The standard document processing pipeline consists of:
//!
//! 1. **LiquidStage** - Render Liquid; block tags become HTML fragments
//! 2. **MarkdownStage** - Convert markdown to HTML and splice fragments back
//! 3. **TemplateStage** - Wrap content in the page template
//! 4. **SidenavStage** - Add the scrollspy side navigation to opted-in pages
//! 5. **WriteStage** - Write final HTML to output directory
//!
//! **SidenavAssetStage** runs once at the end and writes the navigation script.

mod liquid;
mod markdown;
mod sidenav;
mod template;
mod write;

pub use liquid::LiquidStage;
pub use markdown::MarkdownStage;
pub use sidenav::{SidenavAssetStage, SidenavStage};
pub use template::TemplateStage;
pub use write::WriteStage;
