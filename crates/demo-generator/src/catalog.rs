//! Fixed catalogs the builders sample from.

pub const FIRST_NAMES: &[&str] = &[
    "Emma", "Liam", "Olivia", "Noah", "Ava", "Elijah", "Charlotte", "Oliver", "Amelia", "James",
    "Sophia", "Benjamin", "Isabella", "Lucas", "Mia", "Henry", "Evelyn", "Alexander", "Harper",
    "Michael", "Luna", "Daniel", "Camila", "Matthew", "Gianna", "Jackson", "Elizabeth",
    "Sebastian", "Eleanor", "Jack", "Ella", "Aiden", "Abigail", "Owen", "Sofia",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
];

pub const MEMBERSHIP_TIERS: &[&str] = &["Premium", "Basic", "VIP", "Trial"];

pub const CLIENT_NOTES: &[&str] = &[
    "Prefers morning appointments",
    "Injury recovery focus",
    "Wellness enthusiast",
    "Athlete training",
];

pub const OPERATOR_BOOKING_NOTES: &[&str] = &[
    "First visit",
    "Regular client",
    "Referred by friend",
    "Special requirements",
];

pub const MEMBER_BOOKING_NOTES: &[&str] = &[
    "Regular session",
    "First time trying this",
    "Recovery focused",
    "Relaxation session",
];

#[derive(Debug, Clone, Copy)]
pub struct ServiceTemplate {
    pub name: &'static str,
    pub category: &'static str,
    pub price: i64,
    pub duration: u32,
    pub description: &'static str,
}

pub const SERVICE_CATALOG: &[ServiceTemplate] = &[
    ServiceTemplate {
        name: "Cryotherapy Session",
        category: "Recovery",
        price: 65,
        duration: 30,
        description: "Full-body cryotherapy for muscle recovery and inflammation reduction",
    },
    ServiceTemplate {
        name: "Infrared Sauna",
        category: "Wellness",
        price: 45,
        duration: 45,
        description: "Relaxing infrared sauna session for detoxification and stress relief",
    },
    ServiceTemplate {
        name: "Compression Therapy",
        category: "Recovery",
        price: 55,
        duration: 30,
        description: "NormaTec compression therapy for improved circulation",
    },
    ServiceTemplate {
        name: "Red Light Therapy",
        category: "Wellness",
        price: 40,
        duration: 20,
        description: "Photobiomodulation therapy for skin health and cellular regeneration",
    },
    ServiceTemplate {
        name: "Hyperbaric Oxygen",
        category: "Recovery",
        price: 85,
        duration: 60,
        description: "Hyperbaric oxygen therapy for enhanced healing and recovery",
    },
    ServiceTemplate {
        name: "Contrast Therapy",
        category: "Recovery",
        price: 75,
        duration: 45,
        description: "Alternating hot and cold therapy for optimal recovery",
    },
    ServiceTemplate {
        name: "Massage Therapy",
        category: "Wellness",
        price: 95,
        duration: 60,
        description: "Professional therapeutic massage for muscle tension relief",
    },
    ServiceTemplate {
        name: "IV Vitamin Drip",
        category: "Wellness",
        price: 125,
        duration: 45,
        description: "Customized IV vitamin therapy for optimal nutrition",
    },
    ServiceTemplate {
        name: "Float Tank",
        category: "Wellness",
        price: 70,
        duration: 60,
        description: "Sensory deprivation float tank for deep relaxation",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct LocationTemplate {
    pub name: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
}

pub const LOCATION_CATALOG: &[LocationTemplate] = &[
    LocationTemplate {
        name: "Downtown Recovery Center",
        address: "123 Main St, Downtown",
        phone: "(555) 123-4567",
    },
    LocationTemplate {
        name: "Wellness Spa North",
        address: "456 Oak Ave, Northside",
        phone: "(555) 234-5678",
    },
    LocationTemplate {
        name: "Recovery Hub West",
        address: "789 Pine Blvd, Westfield",
        phone: "(555) 345-6789",
    },
];

/// The single demo member shown in the Members Hub.
pub mod member {
    pub const PROFILE_ID: &str = "member-demo-1";
    pub const FIRST_NAME: &str = "Alex";
    pub const LAST_NAME: &str = "Johnson";
    pub const EMAIL: &str = "alex.johnson@email.com";
    pub const MEMBER_FOR_DAYS: i64 = 180;

    pub const MEMBERSHIP_ID: &str = "membership-demo-1";
    pub const PLAN_TYPE: &str = "Premium";
    pub const STATUS: &str = "active";
    pub const CREDITS: i64 = 45;
    pub const STARTED_DAYS_AGO: i64 = 90;
    pub const RENEWS_IN_DAYS: i64 = 30;
}
