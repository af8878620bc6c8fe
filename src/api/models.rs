//! Entity Records
//!
//! Deserialization structs mirroring the directory API payloads. Records are
//! opaque and optional-heavy: the server owns the schema, the client renders
//! whatever one response contains. Relationships arrive embedded (a company
//! carries its industries, a round carries its investors) and are shown
//! wholesale; no referential integrity is maintained client-side.

use serde::Deserialize;

/// Company list row
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompanySummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub hq_city: Option<String>,
    #[serde(default)]
    pub hq_country: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub employee_count_range: Option<String>,
    #[serde(default)]
    pub total_funding_display: Option<String>,
    #[serde(default)]
    pub industries: Vec<Industry>,
}

/// Full company detail
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Company {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub founded_date: Option<String>,
    #[serde(default)]
    pub company_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub hq_country: Option<String>,
    #[serde(default)]
    pub hq_city: Option<String>,
    #[serde(default)]
    pub hq_address: Option<String>,
    #[serde(default)]
    pub employee_count_range: Option<String>,
    #[serde(default)]
    pub total_funding_raised_usd: Option<f64>,
    #[serde(default)]
    pub total_funding_display: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub twitter_url: Option<String>,
    #[serde(default)]
    pub facebook_url: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub moderation_status: Option<String>,
    #[serde(default)]
    pub industries: Vec<Industry>,
    #[serde(default)]
    pub funding_rounds: Vec<FundingRound>,
    #[serde(default)]
    pub people: Vec<Person>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Industry {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub company_count: u64,
}

/// Top-level industry sector with aggregated counts
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sector {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub company_count: u64,
    #[serde(default)]
    pub sub_industries: Vec<SubIndustry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubIndustry {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub company_count: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Investor {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub investor_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub hq_country: Option<String>,
    #[serde(default)]
    pub hq_city: Option<String>,
    #[serde(default)]
    pub portfolio_count: u64,
    #[serde(default)]
    pub total_investments: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Person {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FundingRound {
    pub id: u64,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub round_type: Option<String>,
    #[serde(default)]
    pub announced_date: Option<String>,
    #[serde(default)]
    pub money_raised_usd: Option<f64>,
    #[serde(default)]
    pub money_raised_display: Option<String>,
    #[serde(default)]
    pub investors: Vec<Investor>,
}

/// One shape covers hubs, incubators, accelerators, and universities
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EcosystemBuilder {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrganizationRegistration {
    pub id: u64,
    #[serde(default)]
    pub organization_type: Option<String>,
    #[serde(default)]
    pub organization_type_display: Option<String>,
    pub organization_name: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub founded_year: Option<i64>,
    #[serde(default)]
    pub employee_count: Option<String>,
    #[serde(default)]
    pub headquarters: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub linkedin_profile: Option<String>,
    #[serde(default)]
    pub sectors: Vec<String>,
    #[serde(default)]
    pub funding_stage: Option<String>,
    #[serde(default)]
    pub funding_stage_display: Option<String>,
    #[serde(default)]
    pub total_funding: Option<f64>,
    #[serde(default)]
    pub key_achievements: Option<String>,
    #[serde(default)]
    pub subscribe_newsletter: bool,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub status_display: Option<String>,
    #[serde(default)]
    pub admin_notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactMessage {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub admin_notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CuratedContent {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub content_type_display: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub external_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub published_date: Option<String>,
}

/// Action endpoint result (`approve`, `reject`, `mark_resolved`, ...)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

// ============ Aggregate Stats ============

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub overview: DashboardOverview,
    #[serde(default)]
    pub recent_companies: Vec<RecentCompany>,
    #[serde(default)]
    pub recent_funding: Vec<RecentFunding>,
    #[serde(default)]
    pub industry_stats: Vec<IndustryStat>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DashboardOverview {
    #[serde(default)]
    pub total_companies: u64,
    #[serde(default)]
    pub total_investors: u64,
    #[serde(default)]
    pub total_funding: f64,
    #[serde(default)]
    pub active_companies: u64,
    #[serde(default)]
    pub total_hubs: u64,
    #[serde(default)]
    pub total_incubators: u64,
    #[serde(default)]
    pub total_accelerators: u64,
    #[serde(default)]
    pub total_universities: u64,
    #[serde(default)]
    pub total_rounds: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecentCompany {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecentFunding {
    pub id: u64,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub round_type: String,
    #[serde(default)]
    pub announced_date: String,
    #[serde(default)]
    pub money_raised_usd: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IndustryStat {
    pub name: String,
    #[serde(default)]
    pub company_count: u64,
    #[serde(default)]
    pub total_funding: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct EcosystemOverview {
    #[serde(default)]
    pub overview: EcosystemGrowth,
    #[serde(default)]
    pub top_industries: Vec<IndustryStat>,
    #[serde(default)]
    pub geographic_distribution: Vec<GeographicEntry>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct EcosystemGrowth {
    #[serde(default)]
    pub total_companies: u64,
    #[serde(default)]
    pub total_funding: f64,
    #[serde(default)]
    pub companies_this_year: u64,
    #[serde(default)]
    pub companies_last_year: u64,
    #[serde(default)]
    pub funding_this_year: f64,
    #[serde(default)]
    pub growth_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeographicEntry {
    #[serde(default)]
    pub hq_city: Option<String>,
    #[serde(default)]
    pub hq_country: Option<String>,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub total_funding: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CompanyStatistics {
    #[serde(default)]
    pub total_companies: u64,
    #[serde(default)]
    pub total_funding_usd: f64,
    #[serde(default)]
    pub by_status: Vec<StatusCount>,
    #[serde(default)]
    pub by_country: Vec<CountryCount>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusCount {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryCount {
    #[serde(default)]
    pub hq_country: String,
    #[serde(default)]
    pub count: u64,
}
