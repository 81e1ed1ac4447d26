// --- File: crates/akshara_content/src/directory.rs ---

// The site's content records. These are editorial data, maintained by hand;
// the booking widget reads only FOUNDERS.

use crate::models::{BlogPost, Event, Founder, NavLink, OrgDetails, Program, Stat, Testimonial};

pub const ORG: OrgDetails = OrgDetails {
    name: "Akshara Bharata Society",
    short_intro: "An NGO whose objective is to bring quality in Education and support the students.",
    location: "Rambilli mandal, Visakhapatnam, India, Andhra Pradesh",
    phone: "072594 90606",
    email: "aksharabharatamsociety@gmail.com",
    blog: "aksharabharatamsociety.blogspot.com",
};

pub const LOGO_URL: &str = "https://postimg.cc/gallery/8SktdLP";

pub const FOUNDERS: &[Founder] = &[
    Founder {
        id: "f1",
        name: "Dr. Rajesh Kumar",
        role: "President & Founder",
        specialization: "Educational Policy",
        quote: "Education is the movement from darkness to light.",
        bio: "Dr. Kumar has spent over 20 years in rural education development. He holds a PhD in \
              Social Work and has spearheaded initiatives that reached over 50,000 students across \
              Andhra Pradesh.",
        experience: "22 Years",
        tags: &["Policy", "Leadership"],
        image: "https://images.unsplash.com/photo-1566492031773-4f4e44671857?auto=format&fit=crop&q=80&w=800",
    },
    Founder {
        id: "f2",
        name: "Lakshmi Devi",
        role: "Director of Operations",
        specialization: "Community Outreach",
        quote: "Empowering a child empowers a generation.",
        bio: "Lakshmi brings operational excellence to the team, managing over 200 volunteers and \
              ensuring resources reach the most remote schools effectively.",
        experience: "15 Years",
        tags: &["Operations", "Community"],
        image: "https://images.unsplash.com/photo-1595273670150-bd0c3c392e46?auto=format&fit=crop&q=80&w=800",
    },
    Founder {
        id: "f3",
        name: "Vikram Singh",
        role: "Head of Tech Initiatives",
        specialization: "Digital Literacy",
        quote: "Bridging the digital divide one tablet at a time.",
        bio: "A former tech executive, Vikram now dedicates his time to setting up computer labs \
              and digital curriculum for underprivileged schools.",
        experience: "12 Years",
        tags: &["Tech", "Innovation"],
        image: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?auto=format&fit=crop&q=80&w=800",
    },
    Founder {
        id: "f4",
        name: "Anjali Rao",
        role: "Program Coordinator",
        specialization: "Teacher Training",
        quote: "Teachers are the architects of society.",
        bio: "Anjali focuses on upskilling rural teachers with modern pedagogical techniques.",
        experience: "8 Years",
        tags: &["Training", "Pedagogy"],
        image: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?auto=format&fit=crop&q=80&w=800",
    },
    Founder {
        id: "f5",
        name: "Suresh Babu",
        role: "Field Manager",
        specialization: "Logistics",
        quote: "Execution is everything.",
        bio: "Suresh ensures that books, food, and infrastructure materials reach the right place \
              at the right time.",
        experience: "10 Years",
        tags: &["Field Work", "Logistics"],
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=crop&q=80&w=800",
    },
];

pub const PROGRAMS: &[Program] = &[
    Program {
        id: "p1",
        title: "After-school Tutoring",
        category: "Education",
        description: "Providing remedial classes for students lagging behind in core subjects like \
                      Math and Science.",
        impact: "1,200+ Students",
        image: "https://images.unsplash.com/photo-1503676260728-1c00da094a0b?auto=format&fit=crop&q=80&w=800",
    },
    Program {
        id: "p2",
        title: "Digital Literacy Drive",
        category: "Technology",
        description: "Setting up computer labs and providing basic coding training to rural high \
                      school students.",
        impact: "15 Labs Built",
        image: "https://images.unsplash.com/photo-1516321318423-f06f85e504b3?auto=format&fit=crop&q=80&w=800",
    },
    Program {
        id: "p3",
        title: "Scholarship Grants",
        category: "Financial Aid",
        description: "Merit-based financial support for higher education to deserving students \
                      from low-income families.",
        impact: "500+ Scholarships",
        image: "https://images.unsplash.com/photo-1523240795612-9a054b0db644?auto=format&fit=crop&q=80&w=800",
    },
    Program {
        id: "p4",
        title: "School Infrastructure",
        category: "Infrastructure",
        description: "Renovating dilapidated school buildings and providing clean drinking water \
                      facilities.",
        impact: "30 Schools Renovated",
        image: "https://images.unsplash.com/photo-1580582932707-520aed937b7b?auto=format&fit=crop&q=80&w=800",
    },
    Program {
        id: "p5",
        title: "Girl Child Education",
        category: "Education",
        description: "Special initiatives to ensure girl students stay in school and complete \
                      their secondary education.",
        impact: "2,000+ Girls Supported",
        image: "https://images.unsplash.com/photo-1509062522246-3755977927d7?auto=format&fit=crop&q=80&w=800",
    },
];

pub const EVENTS: &[Event] = &[
    Event {
        id: "e1",
        title: "Annual Charity Gala Night",
        date: "Dec 15, 2024",
        location: "Visakhapatnam Convention Center",
        description: "Join us for an evening of inspiration, performances by our students, and \
                      fundraising to support our scholarship programs.",
        image: "https://images.unsplash.com/photo-1511632765486-a01980e01a18?auto=format&fit=crop&q=80&w=800",
    },
    Event {
        id: "e2",
        title: "Rural Science Fair 2024",
        date: "Jan 20, 2025",
        location: "ZPHS Rambilli School Grounds",
        description: "Showcasing innovative science projects created by students from 10 \
                      neighboring villages.",
        image: "https://images.unsplash.com/photo-1564951434112-64d74cc2a2d7?auto=format&fit=crop&q=80&w=800",
    },
    Event {
        id: "e3",
        title: "Volunteer Orientation Drive",
        date: "Feb 05, 2025",
        location: "ABS Main Office, Rambilli",
        description: "A workshop for new volunteers interested in teaching and field work. \
                      Includes training and lunch.",
        image: "https://images.unsplash.com/photo-1559027615-cd4628902d4a?auto=format&fit=crop&q=80&w=800",
    },
    Event {
        id: "e4",
        title: "Book Donation Camp",
        date: "March 10, 2025",
        location: "City Library, Visakhapatnam",
        description: "Donate your old books and stationery to help build libraries in rural \
                      schools.",
        image: "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?auto=format&fit=crop&q=80&w=800",
    },
];

pub const STATS: &[Stat] = &[
    Stat { label: "Students Reached", value: "15000" },
    Stat { label: "Volunteers", value: "450" },
    Stat { label: "Programs Run", value: "25" },
    Stat { label: "Lives Impacted", value: "50000" },
];

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        id: "b1",
        title: "The State of Rural Education in 2024",
        excerpt: "Exploring the challenges and triumphs of bringing digital tools to remote \
                  villages.",
        date: "March 15, 2024",
        image: "https://images.unsplash.com/photo-1497633762265-9d179a990aa6?auto=format&fit=crop&q=80&w=800",
    },
    BlogPost {
        id: "b2",
        title: "Volunteer Spotlight: Sarah's Journey",
        excerpt: "How one volunteer helped set up 5 libraries in a single summer.",
        date: "February 28, 2024",
        image: "https://images.unsplash.com/photo-1529070538774-1843cb3265df?auto=format&fit=crop&q=80&w=800",
    },
    BlogPost {
        id: "b3",
        title: "Annual Charity Gala Success",
        excerpt: "We raised over ₹50 Lakhs for our scholarship fund thanks to your generosity.",
        date: "January 10, 2024",
        image: "https://images.unsplash.com/photo-1511632765486-a01980e01a18?auto=format&fit=crop&q=80&w=800",
    },
];

pub const GALLERY_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1564951434112-64d74cc2a2d7?auto=format&fit=crop&q=80&w=800",
    "https://images.unsplash.com/photo-1596386461350-326e974853b6?auto=format&fit=crop&q=80&w=800",
    "https://images.unsplash.com/photo-1544928147-79a774562149?auto=format&fit=crop&q=80&w=800",
    "https://images.unsplash.com/photo-1509062522246-3755977927d7?auto=format&fit=crop&q=80&w=800",
    "https://images.unsplash.com/photo-1517048676732-d65bc937f952?auto=format&fit=crop&q=80&w=800",
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "The scholarship I received changed my life. I am now the first graduate in my \
                family.",
        author: "Ravi Teja",
        role: "Engineering Student",
    },
    Testimonial {
        quote: "Volunteering with Akshara Bharatham helped me realize the power of community.",
        author: "Sarah Jenkins",
        role: "Volunteer",
    },
    Testimonial {
        quote: "Their dedication to rural education is unmatched. A truly transparent \
                organization.",
        author: "Mr. Rao",
        role: "Local Donor",
    },
    Testimonial {
        quote: "I saw firsthand how the computer labs transformed the confidence of these village \
                kids.",
        author: "Vikram Singh",
        role: "Tech Sponsor",
    },
    Testimonial {
        quote: "Education is the only way forward, and this team knows how to deliver it where it \
                matters.",
        author: "Dr. Anitha",
        role: "Educationist",
    },
];

pub const NAV_ITEMS: &[NavLink] = &[
    NavLink { label: "Home", path: "/", children: &[] },
    NavLink {
        label: "About",
        path: "/about",
        children: &[
            NavLink { label: "Our Mission", path: "/about", children: &[] },
            NavLink { label: "Leadership", path: "/founders", children: &[] },
            NavLink { label: "Extended Team", path: "/team", children: &[] },
            NavLink { label: "Financial Reports", path: "/financial-reports", children: &[] },
        ],
    },
    NavLink {
        label: "Programs",
        path: "/programs",
        children: &[
            NavLink { label: "All Programs", path: "/programs", children: &[] },
            NavLink { label: "Education Support", path: "/programs", children: &[] },
            NavLink { label: "Digital Literacy", path: "/programs", children: &[] },
            NavLink { label: "Scholarships", path: "/programs", children: &[] },
        ],
    },
    NavLink {
        label: "Media",
        path: "/gallery",
        children: &[
            NavLink { label: "Photo Gallery", path: "/gallery", children: &[] },
            NavLink { label: "Events", path: "/events", children: &[] },
            NavLink { label: "Impact Stories", path: "/impact", children: &[] },
            NavLink { label: "Blog & News", path: "/blog", children: &[] },
        ],
    },
    NavLink {
        label: "Get Involved",
        path: "/volunteer",
        children: &[
            NavLink { label: "Volunteer", path: "/volunteer", children: &[] },
            NavLink { label: "Donate", path: "/donate", children: &[] },
            NavLink { label: "Partner with Us", path: "/contact", children: &[] },
        ],
    },
    NavLink { label: "Contact", path: "/contact", children: &[] },
];
