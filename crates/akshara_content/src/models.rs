// --- File: crates/akshara_content/src/models.rs ---

// Record types for the site's hard-coded content. All records are static
// constants; only Serialize is derived so a rendering layer can emit them.

use serde::Serialize;

/// Contact and identity details of the organization.
#[derive(Debug, Clone, Serialize)]
pub struct OrgDetails {
    pub name: &'static str,
    pub short_intro: &'static str,
    pub location: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub blog: &'static str,
}

/// A leadership/team member who can be the subject of a booking preference.
#[derive(Debug, Clone, Serialize)]
pub struct Founder {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub specialization: &'static str,
    pub quote: &'static str,
    pub bio: &'static str,
    pub experience: &'static str,
    pub tags: &'static [&'static str],
    pub image: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Program {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub impact: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

/// A headline impact number shown on the home page counters.
#[derive(Debug, Clone, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlogPost {
    pub id: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

/// A navigation entry; top-level entries may carry a dropdown of children.
#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    pub children: &'static [NavLink],
}
