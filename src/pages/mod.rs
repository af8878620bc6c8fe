//! Page Components
//!
//! One module per route (list/detail pairs share a module).

pub mod admin_companies;
pub mod admin_contacts;
pub mod admin_organizations;
pub mod auth;
pub mod builders;
pub mod companies;
pub mod company_detail;
pub mod contact;
pub mod content;
pub mod dashboard;
pub mod ecosystem;
pub mod funding;
pub mod home;
pub mod industries;
pub mod investors;
pub mod organization_signup;
pub mod people;
pub mod register_company;

pub use admin_companies::AdminCompanies;
pub use admin_contacts::AdminContacts;
pub use admin_organizations::AdminOrganizations;
pub use auth::{Login, Register};
pub use builders::{BuilderDirectory, BuilderRegister};
pub use companies::Companies;
pub use company_detail::CompanyDetail;
pub use contact::Contact;
pub use content::{Content, ContentDetail};
pub use dashboard::Dashboard;
pub use ecosystem::Ecosystem;
pub use funding::Funding;
pub use home::Home;
pub use industries::Industries;
pub use investors::{InvestorDetail, Investors};
pub use organization_signup::OrganizationSignup;
pub use people::People;
pub use register_company::RegisterCompany;
