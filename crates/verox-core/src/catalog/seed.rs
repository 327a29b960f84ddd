//! Built-in seed data.
//!
//! These records double as the acceptance fixture: tests assert against the
//! exact names, industries and scores listed here.

use super::franchise::{FranchiseRecord, Industry};
use super::lead::{LeadQuality, LeadRecord, PipelineStage, Sentiment};
use chrono::{DateTime, Duration, Utc};

/// Quick replies offered before the first user message.
pub const CONVERSATION_STARTERS: [&str; 4] = [
    "I have $100k to invest. Show me food franchises",
    "What are the fastest-growing franchises in healthcare?",
    "I want passive income. Which franchises work best?",
    "Show me low-cost franchise opportunities under $150k",
];

/// Opening line rendered above an empty conversation.
pub const GREETING: &str = "Hello! I'm your VeroX AI advisor. I'll help you find the perfect franchise opportunity that matches your goals, budget, and interests. What type of franchise are you interested in?";

#[allow(clippy::too_many_arguments)]
fn franchise(
    id: &str,
    name: &str,
    tagline: &str,
    industry: Industry,
    investment: (u64, u64),
    roi: u32,
    success_rate: u8,
    match_score: u8,
    active_units: u32,
    avg_revenue: u64,
    training: &str,
    established: u16,
    territories_available: u32,
    satisfaction_score: f32,
    months_to_profitability: u32,
    support_rating: f32,
) -> FranchiseRecord {
    FranchiseRecord {
        id: id.to_string(),
        name: name.to_string(),
        tagline: tagline.to_string(),
        industry,
        investment_min: investment.0,
        investment_max: investment.1,
        roi,
        success_rate,
        match_score,
        active_units,
        avg_revenue,
        training: training.to_string(),
        established,
        territories_available,
        satisfaction_score,
        months_to_profitability,
        support_rating,
    }
}

pub(crate) fn franchises() -> Vec<FranchiseRecord> {
    vec![
        franchise(
            "1",
            "BrewMaster Coffee",
            "Premium Coffee Experience",
            Industry::FoodAndBeverage,
            (150_000, 350_000),
            35,
            89,
            92,
            245,
            520_000,
            "Comprehensive 6-week program",
            2015,
            38,
            4.7,
            18,
            4.8,
        ),
        franchise(
            "2",
            "FitZone 24/7",
            "Round-the-Clock Fitness",
            Industry::HealthAndFitness,
            (200_000, 500_000),
            42,
            91,
            88,
            412,
            680_000,
            "8-week intensive training",
            2012,
            52,
            4.6,
            20,
            4.7,
        ),
        franchise(
            "3",
            "Pizza Paradise",
            "Authentic Italian Pizza",
            Industry::FoodAndBeverage,
            (180_000, 400_000),
            38,
            85,
            79,
            328,
            590_000,
            "5-week culinary program",
            2010,
            45,
            4.5,
            22,
            4.6,
        ),
        franchise(
            "4",
            "CleanPro Services",
            "Professional Cleaning Solutions",
            Industry::Services,
            (50_000, 120_000),
            55,
            93,
            95,
            567,
            280_000,
            "3-week operational training",
            2008,
            89,
            4.8,
            12,
            4.9,
        ),
        franchise(
            "5",
            "HealthFirst Clinics",
            "Preventive Healthcare Solutions",
            Industry::Healthcare,
            (300_000, 600_000),
            48,
            87,
            84,
            156,
            850_000,
            "12-week healthcare program",
            2018,
            67,
            4.9,
            24,
            4.8,
        ),
    ]
}

struct LeadSeed {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    quality: LeadQuality,
    stage: PipelineStage,
    budget: &'static str,
    timeline: &'static str,
    last_message: &'static str,
    age_ms: i64,
    sentiment: Sentiment,
    intent_score: u8,
    franchise: &'static str,
}

impl LeadSeed {
    fn build(&self, loaded_at: DateTime<Utc>) -> LeadRecord {
        LeadRecord {
            id: self.id.to_string(),
            name: self.name.to_string(),
            email: self.email.to_string(),
            phone: self.phone.to_string(),
            quality: self.quality,
            stage: self.stage,
            budget: self.budget.to_string(),
            timeline: self.timeline.to_string(),
            last_message: self.last_message.to_string(),
            timestamp: loaded_at - Duration::milliseconds(self.age_ms),
            sentiment: self.sentiment,
            intent_score: self.intent_score,
            franchise: self.franchise.to_string(),
        }
    }
}

const DASHBOARD_LEADS: [LeadSeed; 4] = [
    LeadSeed {
        id: "1",
        name: "Sarah Johnson",
        email: "sarah.j@email.com",
        phone: "+1 (555) 123-4567",
        quality: LeadQuality::Hot,
        stage: PipelineStage::Negotiating,
        budget: "$200k-$400k",
        timeline: "3-6 months",
        last_message: "I'd like to schedule a call to discuss the contract terms.",
        age_ms: 3_600_000,
        sentiment: Sentiment::Positive,
        intent_score: 92,
        franchise: "FitZone 24/7",
    },
    LeadSeed {
        id: "2",
        name: "Michael Chen",
        email: "m.chen@business.com",
        phone: "+1 (555) 234-5678",
        quality: LeadQuality::Warm,
        stage: PipelineStage::Interested,
        budget: "$100k-$200k",
        timeline: "6-12 months",
        last_message: "Can you send me more information about the training program?",
        age_ms: 7_200_000,
        sentiment: Sentiment::Neutral,
        intent_score: 78,
        franchise: "BrewMaster Coffee",
    },
    LeadSeed {
        id: "3",
        name: "Emily Rodriguez",
        email: "emily.r@gmail.com",
        phone: "+1 (555) 345-6789",
        quality: LeadQuality::Hot,
        stage: PipelineStage::Qualified,
        budget: "$50k-$150k",
        timeline: "Immediate",
        last_message: "I have the funding ready. What are the next steps?",
        age_ms: 1_800_000,
        sentiment: Sentiment::Positive,
        intent_score: 95,
        franchise: "CleanPro Services",
    },
    LeadSeed {
        id: "4",
        name: "David Kim",
        email: "david.kim@startup.io",
        phone: "+1 (555) 456-7890",
        quality: LeadQuality::Cold,
        stage: PipelineStage::New,
        budget: "Not specified",
        timeline: "Researching",
        last_message: "Just browsing, thanks.",
        age_ms: 14_400_000,
        sentiment: Sentiment::Neutral,
        intent_score: 45,
        franchise: "Pizza Paradise",
    },
];

const ROSTER_EXTRA_LEADS: [LeadSeed; 4] = [
    LeadSeed {
        id: "5",
        name: "Jennifer Martinez",
        email: "j.martinez@email.com",
        phone: "+1 (555) 567-8901",
        quality: LeadQuality::Warm,
        stage: PipelineStage::Qualified,
        budget: "$150k-$300k",
        timeline: "3-6 months",
        last_message: "What kind of support do you provide?",
        age_ms: 21_600_000,
        sentiment: Sentiment::Positive,
        intent_score: 82,
        franchise: "BrewMaster Coffee",
    },
    LeadSeed {
        id: "6",
        name: "Robert Taylor",
        email: "r.taylor@business.com",
        phone: "+1 (555) 678-9012",
        quality: LeadQuality::Hot,
        stage: PipelineStage::Interested,
        budget: "$100k-$250k",
        timeline: "Immediate",
        last_message: "Ready to move forward. Let's talk numbers.",
        age_ms: 5_400_000,
        sentiment: Sentiment::Positive,
        intent_score: 94,
        franchise: "Pizza Paradise",
    },
    LeadSeed {
        id: "7",
        name: "Amanda White",
        email: "a.white@gmail.com",
        phone: "+1 (555) 789-0123",
        quality: LeadQuality::Warm,
        stage: PipelineStage::New,
        budget: "$200k-$500k",
        timeline: "6-12 months",
        last_message: "Tell me more about the fitness franchise.",
        age_ms: 10_800_000,
        sentiment: Sentiment::Neutral,
        intent_score: 68,
        franchise: "FitZone 24/7",
    },
    LeadSeed {
        id: "8",
        name: "James Brown",
        email: "j.brown@startup.io",
        phone: "+1 (555) 890-1234",
        quality: LeadQuality::Cold,
        stage: PipelineStage::New,
        budget: "Not specified",
        timeline: "Researching",
        last_message: "Just looking around.",
        age_ms: 32_400_000,
        sentiment: Sentiment::Neutral,
        intent_score: 38,
        franchise: "CleanPro Services",
    },
];

/// Leads shown on the dashboard home view.
pub(crate) fn dashboard_leads(loaded_at: DateTime<Utc>) -> Vec<LeadRecord> {
    DASHBOARD_LEADS.iter().map(|l| l.build(loaded_at)).collect()
}

/// Additional leads that only appear on the full leads roster.
pub(crate) fn roster_extra_leads(loaded_at: DateTime<Utc>) -> Vec<LeadRecord> {
    ROSTER_EXTRA_LEADS.iter().map(|l| l.build(loaded_at)).collect()
}
