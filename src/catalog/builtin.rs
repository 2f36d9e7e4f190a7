//! Built-in site content: the catalog of searchable pages and sections

use super::entry::{Category, SearchEntry};

/// Suggestions offered before the user has typed enough to search
pub const DEFAULT_SUGGESTIONS: &[&str] = &[
    "B.Ed Admission",
    "D.El.Ed Programme",
    "Fee Structure",
    "Eligibility Criteria",
    "Library",
    "Contact Us",
];

struct StaticEntry {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    path: &'static str,
    section: Option<&'static str>,
    keywords: &'static [&'static str],
    category: Category,
    icon: &'static str,
    priority: u32,
}

impl StaticEntry {
    fn to_entry(&self) -> SearchEntry {
        SearchEntry {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            path: self.path.to_string(),
            section: self.section.map(str::to_string),
            keywords: self.keywords.iter().map(|k| k.to_string()).collect(),
            category: self.category,
            icon: self.icon.to_string(),
            priority: self.priority,
        }
    }
}

pub(super) fn entries() -> Vec<SearchEntry> {
    SITE_ENTRIES.iter().map(StaticEntry::to_entry).collect()
}

const SITE_ENTRIES: &[StaticEntry] = &[
    // Pages
    StaticEntry {
        id: "page-home",
        title: "Home",
        description: "Welcome to the college of teacher education, news highlights and quick links",
        path: "/",
        section: None,
        keywords: &["home", "main", "welcome", "landing", "college"],
        category: Category::Page,
        icon: "home",
        priority: 10,
    },
    StaticEntry {
        id: "page-about",
        title: "About Us",
        description: "History, vision and mission of the institution and its founding trust",
        path: "/about",
        section: None,
        keywords: &["about", "history", "vision", "mission", "trust", "institution"],
        category: Category::Page,
        icon: "info",
        priority: 8,
    },
    StaticEntry {
        id: "page-principal",
        title: "Principal's Message",
        description: "A message from the principal to students and parents",
        path: "/about",
        section: Some("principal"),
        keywords: &["principal", "message", "head", "leadership"],
        category: Category::Page,
        icon: "user",
        priority: 5,
    },
    StaticEntry {
        id: "page-faculty",
        title: "Faculty",
        description: "Teaching staff, qualifications and departments",
        path: "/faculty",
        section: None,
        keywords: &["faculty", "staff", "teachers", "professors", "lecturers"],
        category: Category::Page,
        icon: "users",
        priority: 7,
    },
    StaticEntry {
        id: "page-programmes",
        title: "Programmes",
        description: "All teacher education courses offered by the college",
        path: "/programmes",
        section: None,
        keywords: &["programmes", "programs", "courses", "degrees"],
        category: Category::Page,
        icon: "book",
        priority: 9,
    },
    StaticEntry {
        id: "page-gallery",
        title: "Gallery",
        description: "Photos from campus life, events and celebrations",
        path: "/gallery",
        section: None,
        keywords: &["gallery", "photos", "pictures", "images", "events"],
        category: Category::Page,
        icon: "image",
        priority: 5,
    },
    StaticEntry {
        id: "page-news",
        title: "News & Events",
        description: "Latest announcements, notices and upcoming events",
        path: "/news",
        section: None,
        keywords: &["news", "events", "announcements", "notices", "updates"],
        category: Category::Page,
        icon: "megaphone",
        priority: 6,
    },
    StaticEntry {
        id: "page-contact",
        title: "Contact Us",
        description: "Address, phone numbers, email and map directions to the campus",
        path: "/contact",
        section: None,
        keywords: &["contact", "address", "phone", "email", "location", "map", "directions"],
        category: Category::Page,
        icon: "phone",
        priority: 9,
    },
    // Programmes
    StaticEntry {
        id: "prog-bed",
        title: "B.Ed (Bachelor of Education)",
        description: "Two-year professional programme preparing teachers for secondary schools",
        path: "/programmes",
        section: Some("bed"),
        keywords: &["bed", "secondary", "teacher", "degree"],
        category: Category::Program,
        icon: "graduation-cap",
        priority: 10,
    },
    StaticEntry {
        id: "prog-deled",
        title: "D.El.Ed (Diploma in Elementary Education)",
        description: "Two-year diploma for primary and upper primary school teaching",
        path: "/programmes",
        section: Some("deled"),
        keywords: &["deled", "diploma", "elementary", "primary", "teacher"],
        category: Category::Program,
        icon: "graduation-cap",
        priority: 10,
    },
    StaticEntry {
        id: "prog-med",
        title: "M.Ed (Master of Education)",
        description: "Postgraduate programme in educational research and teacher training",
        path: "/programmes",
        section: Some("med"),
        keywords: &["med", "masters", "postgraduate", "research"],
        category: Category::Program,
        icon: "graduation-cap",
        priority: 7,
    },
    StaticEntry {
        id: "prog-internship",
        title: "School Internship",
        description: "Practice teaching in partner schools as part of the curriculum",
        path: "/programmes",
        section: Some("internship"),
        keywords: &["internship", "practice teaching", "practicum", "schools"],
        category: Category::Program,
        icon: "briefcase",
        priority: 5,
    },
    StaticEntry {
        id: "prog-syllabus",
        title: "Syllabus & Curriculum",
        description: "Semester-wise syllabus, subjects and credit structure",
        path: "/programmes",
        section: Some("syllabus"),
        keywords: &["syllabus", "curriculum", "subjects", "semester", "credits"],
        category: Category::Program,
        icon: "list",
        priority: 6,
    },
    // Admissions
    StaticEntry {
        id: "adm-process",
        title: "Admission Process",
        description: "Step-by-step guide to applying, entrance test and counselling",
        path: "/admissions",
        section: Some("process"),
        keywords: &["admission", "apply", "application", "entrance", "counselling", "enroll"],
        category: Category::Admission,
        icon: "clipboard",
        priority: 10,
    },
    StaticEntry {
        id: "adm-eligibility",
        title: "Eligibility Criteria",
        description: "Minimum qualifications and marks required for each programme",
        path: "/admissions",
        section: Some("eligibility"),
        keywords: &["eligibility", "qualification", "criteria", "marks", "requirements"],
        category: Category::Admission,
        icon: "check",
        priority: 9,
    },
    StaticEntry {
        id: "adm-fees",
        title: "Fee Structure",
        description: "Tuition, examination and hostel charges with payment schedule",
        path: "/admissions",
        section: Some("fees"),
        keywords: &["fees", "fee", "tuition", "payment", "cost"],
        category: Category::Admission,
        icon: "wallet",
        priority: 9,
    },
    StaticEntry {
        id: "adm-scholarships",
        title: "Scholarships",
        description: "Government and institutional scholarships and fee concessions",
        path: "/admissions",
        section: Some("scholarships"),
        keywords: &["scholarship", "financial aid", "concession", "stipend"],
        category: Category::Admission,
        icon: "award",
        priority: 7,
    },
    StaticEntry {
        id: "adm-dates",
        title: "Important Dates",
        description: "Application deadlines, entrance test schedule and session start",
        path: "/admissions",
        section: Some("dates"),
        keywords: &["dates", "deadline", "schedule", "calendar"],
        category: Category::Admission,
        icon: "calendar",
        priority: 8,
    },
    // Facilities
    StaticEntry {
        id: "fac-library",
        title: "Library",
        description: "Reading room, reference books, journals and digital resources",
        path: "/facilities",
        section: Some("library"),
        keywords: &["library", "books", "journals", "reading room", "e-library"],
        category: Category::Facility,
        icon: "book-open",
        priority: 7,
    },
    StaticEntry {
        id: "fac-ict-lab",
        title: "ICT Lab",
        description: "Computer laboratory with internet access for technology-enabled teaching",
        path: "/facilities",
        section: Some("ict"),
        keywords: &["computer", "lab", "ict", "internet", "technology"],
        category: Category::Facility,
        icon: "monitor",
        priority: 6,
    },
    StaticEntry {
        id: "fac-science-lab",
        title: "Science Laboratory",
        description: "Physics, chemistry and biology practicals for pedagogy of science",
        path: "/facilities",
        section: Some("science"),
        keywords: &["science", "laboratory", "physics", "chemistry", "biology"],
        category: Category::Facility,
        icon: "flask",
        priority: 5,
    },
    StaticEntry {
        id: "fac-hostel",
        title: "Hostel",
        description: "Separate residential accommodation for students with mess facility",
        path: "/facilities",
        section: Some("hostel"),
        keywords: &["hostel", "accommodation", "residence", "mess", "dormitory"],
        category: Category::Facility,
        icon: "building",
        priority: 6,
    },
    StaticEntry {
        id: "fac-sports",
        title: "Sports Ground",
        description: "Playground and indoor games for physical education",
        path: "/facilities",
        section: Some("sports"),
        keywords: &["sports", "playground", "games", "physical education"],
        category: Category::Facility,
        icon: "trophy",
        priority: 4,
    },
    // Activities
    StaticEntry {
        id: "act-cultural",
        title: "Cultural Programmes",
        description: "Annual day, festivals, music and dance performances",
        path: "/activities",
        section: Some("cultural"),
        keywords: &["cultural", "annual day", "festival", "music", "dance"],
        category: Category::Activity,
        icon: "music",
        priority: 4,
    },
    StaticEntry {
        id: "act-workshops",
        title: "Workshops & Seminars",
        description: "Guest lectures, seminars and skill development workshops",
        path: "/activities",
        section: Some("workshops"),
        keywords: &["workshop", "seminar", "guest lecture", "training"],
        category: Category::Activity,
        icon: "presentation",
        priority: 5,
    },
    StaticEntry {
        id: "act-outreach",
        title: "Community Outreach",
        description: "Literacy drives, awareness campaigns and village visits",
        path: "/activities",
        section: Some("outreach"),
        keywords: &["outreach", "community", "nss", "volunteer", "awareness"],
        category: Category::Activity,
        icon: "heart",
        priority: 3,
    },
    // Documents
    StaticEntry {
        id: "doc-prospectus",
        title: "Prospectus",
        description: "Downloadable prospectus with programme details and rules",
        path: "/downloads",
        section: Some("prospectus"),
        keywords: &["prospectus", "brochure", "download", "pdf"],
        category: Category::Document,
        icon: "file",
        priority: 7,
    },
    StaticEntry {
        id: "doc-application-form",
        title: "Application Form",
        description: "Printable admission application form",
        path: "/downloads",
        section: Some("application-form"),
        keywords: &["form", "application", "download", "admission form"],
        category: Category::Document,
        icon: "file-text",
        priority: 8,
    },
    StaticEntry {
        id: "doc-ncte",
        title: "NCTE Recognition",
        description: "Recognition order and affiliation documents from the regulatory council",
        path: "/downloads",
        section: Some("ncte"),
        keywords: &["ncte", "recognition", "affiliation", "approval", "university"],
        category: Category::Document,
        icon: "shield",
        priority: 6,
    },
    // Clubs
    StaticEntry {
        id: "club-eco",
        title: "Eco Club",
        description: "Tree plantation, cleanliness drives and environmental awareness",
        path: "/clubs",
        section: Some("eco"),
        keywords: &["eco", "environment", "green", "plantation"],
        category: Category::Club,
        icon: "leaf",
        priority: 3,
    },
    StaticEntry {
        id: "club-literary",
        title: "Literary Club",
        description: "Debates, elocution, creative writing and the college magazine",
        path: "/clubs",
        section: Some("literary"),
        keywords: &["literary", "debate", "writing", "magazine", "elocution"],
        category: Category::Club,
        icon: "pen",
        priority: 3,
    },
    // Services
    StaticEntry {
        id: "svc-placement",
        title: "Placement Cell",
        description: "Campus recruitment drives with schools and career guidance",
        path: "/services",
        section: Some("placement"),
        keywords: &["placement", "jobs", "recruitment", "career"],
        category: Category::Service,
        icon: "briefcase",
        priority: 6,
    },
    StaticEntry {
        id: "svc-grievance",
        title: "Grievance Redressal",
        description: "Submit complaints and grievances to the redressal committee",
        path: "/services",
        section: Some("grievance"),
        keywords: &["grievance", "complaint", "redressal", "committee"],
        category: Category::Service,
        icon: "alert",
        priority: 4,
    },
    StaticEntry {
        id: "svc-transport",
        title: "Transport",
        description: "College bus routes and timings",
        path: "/services",
        section: Some("transport"),
        keywords: &["transport", "bus", "routes", "travel"],
        category: Category::Service,
        icon: "bus",
        priority: 4,
    },
    // FAQ
    StaticEntry {
        id: "faq-admission-open",
        title: "When do admissions open?",
        description: "Admissions usually open after the state entrance results are declared",
        path: "/faq",
        section: Some("admission-open"),
        keywords: &["admission", "open", "when", "start"],
        category: Category::Faq,
        icon: "help",
        priority: 5,
    },
    StaticEntry {
        id: "faq-hostel",
        title: "Is hostel accommodation available?",
        description: "Yes, separate hostels are available on a first-come basis",
        path: "/faq",
        section: Some("hostel"),
        keywords: &["hostel", "stay", "accommodation"],
        category: Category::Faq,
        icon: "help",
        priority: 3,
    },
    StaticEntry {
        id: "faq-online-fees",
        title: "Can fees be paid online?",
        description: "Fees can be paid through the online payment portal or at the office",
        path: "/faq",
        section: Some("online-fees"),
        keywords: &["fees", "online", "payment", "pay"],
        category: Category::Faq,
        icon: "help",
        priority: 3,
    },
];
