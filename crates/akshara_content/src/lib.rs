// --- File: crates/akshara_content/src/lib.rs ---

// Declare modules within this crate
pub mod directory; // The content records themselves
pub mod legal; // Legal/transparency markdown texts
pub mod models; // Record types

pub use directory::{
    BLOG_POSTS, EVENTS, FOUNDERS, GALLERY_IMAGES, LOGO_URL, NAV_ITEMS, ORG, PROGRAMS, STATS,
    TESTIMONIALS,
};
pub use models::{
    BlogPost, Event, Founder, NavLink, OrgDetails, Program, Stat, Testimonial,
};
