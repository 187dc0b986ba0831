//! Static content served verbatim
//!
//! FAQ entries, team bios, and AI insights are fixed demo data and are not
//! persisted. The demo claims seed an empty table on first start.

use chrono::NaiveDate;
use serde::Serialize;

use core_kernel::ClaimId;
use crate::claim::Claim;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub category: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub avatar: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AiInsight {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub severity: &'static str,
    pub date: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        category: "general",
        question: "What is the Forest Rights Act (FRA)?",
        answer: "The Forest Rights Act, 2006 recognizes and vests the forest rights and occupation in forest land in forest dwelling Scheduled Tribes and other traditional forest dwellers.",
    },
    FaqEntry {
        category: "claims",
        question: "How do I submit a claim?",
        answer: "Claims must be submitted through the Gram Sabha with proper documentation including proof of residence and traditional forest dwelling.",
    },
    FaqEntry {
        category: "technical",
        question: "How is the data updated?",
        answer: "The system is updated in real-time as claims are processed at district and state levels.",
    },
    FaqEntry {
        category: "general",
        question: "Who is eligible for forest rights?",
        answer: "Scheduled Tribes and other traditional forest dwellers who have been residing in forest areas prior to December 13, 2005, are eligible for forest rights under the FRA.",
    },
    FaqEntry {
        category: "claims",
        question: "What documents are required for a claim?",
        answer: "Required documents include proof of residence, voter ID, ration card, evidence of traditional occupation, and community verification from Gram Sabha.",
    },
    FaqEntry {
        category: "technical",
        question: "How accurate is the GPS mapping?",
        answer: "Our GPS mapping uses satellite imagery with accuracy up to 1-meter resolution, updated quarterly through ISRO's remote sensing data.",
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Dr. Priya Sharma",
        role: "Project Director",
        bio: "15+ years experience in forest policy and GIS mapping",
        avatar: "👩‍💼",
    },
    TeamMember {
        name: "Rajesh Kumar",
        role: "Technical Lead",
        bio: "Expert in geospatial technologies and data visualization",
        avatar: "👨‍💻",
    },
    TeamMember {
        name: "Anita Patel",
        role: "Policy Advisor",
        bio: "Former forest rights activist with deep community knowledge",
        avatar: "👩‍🎓",
    },
];

pub const AI_INSIGHTS: &[AiInsight] = &[
    AiInsight {
        kind: "alert",
        title: "Unusual Claim Pattern Detected",
        description: "Multiple claims submitted from same GPS coordinates in Ranchi district",
        severity: "high",
        date: "2024-09-18",
    },
    AiInsight {
        kind: "anomaly",
        title: "Land Use Change Detected",
        description: "Significant deforestation detected in protected area near Koraput",
        severity: "medium",
        date: "2024-09-17",
    },
    AiInsight {
        kind: "prediction",
        title: "Processing Time Prediction",
        description: "Current pending claims likely to be processed within 45 days based on historical data",
        severity: "low",
        date: "2024-09-16",
    },
];

/// Demo records inserted into an empty table
///
/// These carry the legacy three-digit sequence (`FRA2024001`).
pub fn demo_claims() -> Vec<Claim> {
    [
        ("FRA2024001", "Ramesh Kumar", "Jharkhand, Ranchi", 2.5, "Pending", 15, "Documents under review"),
        ("FRA2024002", "Sunita Devi", "Odisha, Koraput", 1.8, "Approved", 10, "All documents verified"),
        ("FRA2024003", "Arjun Singh", "Madhya Pradesh, Balaghat", 3.2, "Rejected", 8, "Insufficient evidence"),
        ("FRA2024004", "Meera Tribal", "Chhattisgarh, Dantewada", 1.9, "Approved", 12, "Community forest rights approved"),
        ("FRA2024005", "Ravi Oraon", "Jharkhand, Gumla", 2.8, "Pending", 14, "Awaiting field verification"),
    ]
    .into_iter()
    .filter_map(|(id, name, location, area, status, day, remarks)| {
        Some(Claim {
            id: ClaimId::from(id),
            claimant_name: name.to_string(),
            location: location.to_string(),
            area,
            status: status.to_string(),
            date_submitted: NaiveDate::from_ymd_opt(2024, 9, day)?,
            remarks: remarks.to_string(),
        })
    })
    .collect()
}
