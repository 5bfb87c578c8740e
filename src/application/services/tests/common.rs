//! In-memory store implementing every repository trait.
//!
//! Uniqueness rules mirror the schema's constraints and are checked under the
//! same lock as the write, so concurrent inserts race exactly like they do
//! against PostgreSQL.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::application::services::{
    ApplicationServiceImpl, AspirantProfileServiceImpl, AuthServiceImpl, CompanyProfileServiceImpl,
    JobOfferServiceImpl, TokenCodec,
};
use crate::config::JwtSettings;
use crate::domain::services::{OwnedEntity, OwnershipResolver, StatusPolicy};
use crate::domain::{
    Application, ApplicationRepository, ApplicationStatus, ApplicationWithAspirant,
    ApplicationWithOffer, AspirantProfile, AspirantProfileRepository, CompanyProfile,
    CompanyProfileRepository, DefaultProfile, ExperienceItem, ExperienceItemRepository, JobOffer,
    JobOfferRepository, JobOfferStatus, JobOfferWithCompany, SkillItem, SkillItemRepository, User,
    UserRepository, UserRole, COMPANY_NAME_MAX_CHARS,
};
use crate::shared::error::AppError;
use crate::shared::snowflake::{SnowflakeGenerator, DEFAULT_EPOCH};

#[derive(Default)]
struct State {
    users: HashMap<i64, User>,
    aspirants: HashMap<i64, AspirantProfile>,
    skills: HashMap<i64, SkillItem>,
    experience: HashMap<i64, ExperienceItem>,
    companies: HashMap<i64, CompanyProfile>,
    offers: HashMap<i64, JobOffer>,
    applications: HashMap<i64, Application>,
}

impl State {
    fn check_aspirant(&self, profile: &AspirantProfile) -> Result<(), AppError> {
        for other in self.aspirants.values().filter(|p| p.id != profile.id) {
            if other.user_id == profile.user_id {
                return Err(AppError::Conflict("Aspirant profile already exists".into()));
            }
            if other.email == profile.email {
                return Err(AppError::Conflict("Profile email already in use".into()));
            }
        }
        Ok(())
    }

    fn check_company(&self, profile: &CompanyProfile) -> Result<(), AppError> {
        // Postgres refuses values wider than VARCHAR(150).
        if profile.company_name.chars().count() > COMPANY_NAME_MAX_CHARS {
            return Err(AppError::Internal("value too long for company_name".into()));
        }
        for other in self.companies.values().filter(|p| p.id != profile.id) {
            if other.user_id == profile.user_id {
                return Err(AppError::Conflict("Company profile already exists".into()));
            }
            if other.company_name == profile.company_name {
                return Err(AppError::Conflict("Company name already taken".into()));
            }
            if other.email == profile.email {
                return Err(AppError::Conflict("Company email already in use".into()));
            }
        }
        Ok(())
    }

    fn check_skill(&self, skill: &SkillItem) -> Result<(), AppError> {
        let taken = self.skills.values().any(|s| {
            s.id != skill.id && s.profile_id == skill.profile_id && s.skill_name == skill.skill_name
        });
        if taken {
            return Err(AppError::Conflict("Skill already listed on this profile".into()));
        }
        Ok(())
    }

    fn check_skill_set(skills: &[SkillItem]) -> Result<(), AppError> {
        for (i, skill) in skills.iter().enumerate() {
            if skills[..i].iter().any(|s| s.skill_name == skill.skill_name) {
                return Err(AppError::Conflict("Skill already listed on this profile".into()));
            }
        }
        Ok(())
    }

    fn replace_skills(&mut self, profile_id: i64, skills: Vec<SkillItem>) {
        self.skills.retain(|_, s| s.profile_id != profile_id);
        self.skills.extend(skills.into_iter().map(|s| (s.id, s)));
    }

    fn replace_experience(&mut self, profile_id: i64, items: Vec<ExperienceItem>) {
        self.experience.retain(|_, e| e.profile_id != profile_id);
        self.experience.extend(items.into_iter().map(|e| (e.id, e)));
    }

    fn skills_of(&self, profile_id: i64) -> Vec<SkillItem> {
        let mut skills: Vec<_> = self
            .skills
            .values()
            .filter(|s| s.profile_id == profile_id)
            .cloned()
            .collect();
        skills.sort_by(|a, b| a.skill_name.cmp(&b.skill_name));
        skills
    }

    fn experience_of(&self, profile_id: i64) -> Vec<ExperienceItem> {
        let mut items: Vec<_> = self
            .experience
            .values()
            .filter(|e| e.profile_id == profile_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.start_date.cmp(&a.start_date).then(b.id.cmp(&a.id)));
        items
    }

    fn loaded_aspirant(&self, profile: &AspirantProfile) -> AspirantProfile {
        AspirantProfile {
            skills: self.skills_of(profile.id),
            experience: self.experience_of(profile.id),
            ..profile.clone()
        }
    }

    fn remove_offer(&mut self, offer_id: i64) {
        self.offers.remove(&offer_id);
        self.applications.retain(|_, a| a.job_offer_id != offer_id);
    }

    fn newest_first(applications: &mut [Application]) {
        applications.sort_by(|a, b| b.applied_at.cmp(&a.applied_at).then(b.id.cmp(&a.id)));
    }
}

/// Shared in-memory backing for every repository trait.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
    skip_duplicate_precheck: AtomicBool,
    fail_profile_inserts: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make `exists_for` always answer `false`, so duplicates only surface
    /// at insert time.
    pub fn skip_duplicate_precheck(&self) {
        self.skip_duplicate_precheck.store(true, Ordering::SeqCst);
    }

    /// Make the profile half of a registration fail.
    pub fn fail_profile_inserts(&self, fail: bool) {
        self.fail_profile_inserts.store(fail, Ordering::SeqCst);
    }

    pub fn user_count(&self) -> usize {
        self.state.lock().users.len()
    }

    pub fn application_count(&self) -> usize {
        self.state.lock().applications.len()
    }

    pub fn company_profile_of(&self, user_id: i64) -> Option<CompanyProfile> {
        self.state
            .lock()
            .companies
            .values()
            .find(|c| c.user_id == user_id)
            .cloned()
    }

    pub fn aspirant_profile_of(&self, user_id: i64) -> Option<AspirantProfile> {
        self.state
            .lock()
            .aspirants
            .values()
            .find(|p| p.user_id == user_id)
            .cloned()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.state.lock().users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .state
            .lock()
            .users
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        Ok(self.state.lock().users.values().any(|u| u.email == email))
    }

    async fn create_with_profile(
        &self,
        user: &User,
        profile: &DefaultProfile,
    ) -> Result<User, AppError> {
        let mut state = self.state.lock();

        if state.users.values().any(|u| u.email == user.email) {
            return Err(AppError::Conflict("Email already registered".into()));
        }
        if self.fail_profile_inserts.load(Ordering::SeqCst) {
            return Err(AppError::Internal("profile insert failed".into()));
        }

        // Both halves are validated before either is written.
        match profile {
            DefaultProfile::Aspirant(p) => state.check_aspirant(p)?,
            DefaultProfile::Company(p) => state.check_company(p)?,
        }

        state.users.insert(user.id, user.clone());
        match profile {
            DefaultProfile::Aspirant(p) => {
                state.aspirants.insert(p.id, p.clone());
            }
            DefaultProfile::Company(p) => {
                state.companies.insert(p.id, p.clone());
            }
        }
        Ok(user.clone())
    }
}

#[async_trait]
impl AspirantProfileRepository for MemoryStore {
    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<AspirantProfile>, AppError> {
        let state = self.state.lock();
        Ok(state
            .aspirants
            .values()
            .find(|p| p.user_id == user_id)
            .map(|p| state.loaded_aspirant(p)))
    }

    async fn create(&self, profile: &AspirantProfile) -> Result<AspirantProfile, AppError> {
        let mut state = self.state.lock();
        state.check_aspirant(profile)?;
        State::check_skill_set(&profile.skills)?;

        let base = AspirantProfile {
            skills: Vec::new(),
            experience: Vec::new(),
            ..profile.clone()
        };
        state.aspirants.insert(profile.id, base);
        state.replace_skills(profile.id, profile.skills.clone());
        state.replace_experience(profile.id, profile.experience.clone());

        Ok(state.loaded_aspirant(profile))
    }

    async fn update(
        &self,
        profile: &AspirantProfile,
        skills: Option<Vec<SkillItem>>,
        experience: Option<Vec<ExperienceItem>>,
    ) -> Result<AspirantProfile, AppError> {
        let mut state = self.state.lock();
        if !state.aspirants.contains_key(&profile.id) {
            return Err(AppError::NotFound("Aspirant profile not found".into()));
        }
        state.check_aspirant(profile)?;
        if let Some(skills) = &skills {
            State::check_skill_set(skills)?;
        }

        let base = AspirantProfile {
            skills: Vec::new(),
            experience: Vec::new(),
            updated_at: Utc::now(),
            ..profile.clone()
        };
        state.aspirants.insert(profile.id, base.clone());
        if let Some(skills) = skills {
            state.replace_skills(profile.id, skills);
        }
        if let Some(experience) = experience {
            state.replace_experience(profile.id, experience);
        }

        Ok(state.loaded_aspirant(&base))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut state = self.state.lock();
        if state.aspirants.remove(&id).is_none() {
            return Err(AppError::NotFound("Aspirant profile not found".into()));
        }
        state.skills.retain(|_, s| s.profile_id != id);
        state.experience.retain(|_, e| e.profile_id != id);
        state.applications.retain(|_, a| a.aspirant_id != id);
        Ok(())
    }
}

#[async_trait]
impl SkillItemRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<SkillItem>, AppError> {
        Ok(self.state.lock().skills.get(&id).cloned())
    }

    async fn find_by_profile(&self, profile_id: i64) -> Result<Vec<SkillItem>, AppError> {
        Ok(self.state.lock().skills_of(profile_id))
    }

    async fn create(&self, skill: &SkillItem) -> Result<SkillItem, AppError> {
        let mut state = self.state.lock();
        if !state.aspirants.contains_key(&skill.profile_id) {
            return Err(AppError::NotFound("Aspirant profile not found".into()));
        }
        state.check_skill(skill)?;
        state.skills.insert(skill.id, skill.clone());
        Ok(skill.clone())
    }

    async fn update(&self, skill: &SkillItem) -> Result<SkillItem, AppError> {
        let mut state = self.state.lock();
        if !state.skills.contains_key(&skill.id) {
            return Err(AppError::NotFound("Skill not found".into()));
        }
        state.check_skill(skill)?;
        state.skills.insert(skill.id, skill.clone());
        Ok(skill.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.state
            .lock()
            .skills
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Skill not found".into()))
    }
}

#[async_trait]
impl ExperienceItemRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<ExperienceItem>, AppError> {
        Ok(self.state.lock().experience.get(&id).cloned())
    }

    async fn find_by_profile(&self, profile_id: i64) -> Result<Vec<ExperienceItem>, AppError> {
        Ok(self.state.lock().experience_of(profile_id))
    }

    async fn create(&self, item: &ExperienceItem) -> Result<ExperienceItem, AppError> {
        let mut state = self.state.lock();
        if !state.aspirants.contains_key(&item.profile_id) {
            return Err(AppError::NotFound("Aspirant profile not found".into()));
        }
        state.experience.insert(item.id, item.clone());
        Ok(item.clone())
    }

    async fn update(&self, item: &ExperienceItem) -> Result<ExperienceItem, AppError> {
        let mut state = self.state.lock();
        if !state.experience.contains_key(&item.id) {
            return Err(AppError::NotFound("Experience item not found".into()));
        }
        state.experience.insert(item.id, item.clone());
        Ok(item.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.state
            .lock()
            .experience
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Experience item not found".into()))
    }
}

#[async_trait]
impl CompanyProfileRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<CompanyProfile>, AppError> {
        Ok(self.state.lock().companies.get(&id).cloned())
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<CompanyProfile>, AppError> {
        Ok(self.company_profile_of(user_id))
    }

    async fn create(&self, profile: &CompanyProfile) -> Result<CompanyProfile, AppError> {
        let mut state = self.state.lock();
        state.check_company(profile)?;
        state.companies.insert(profile.id, profile.clone());
        Ok(profile.clone())
    }

    async fn update(&self, profile: &CompanyProfile) -> Result<CompanyProfile, AppError> {
        let mut state = self.state.lock();
        if !state.companies.contains_key(&profile.id) {
            return Err(AppError::NotFound("Company profile not found".into()));
        }
        state.check_company(profile)?;
        state.companies.insert(profile.id, profile.clone());
        Ok(profile.clone())
    }
}

#[async_trait]
impl JobOfferRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<JobOffer>, AppError> {
        Ok(self.state.lock().offers.get(&id).cloned())
    }

    async fn find_with_company(&self, id: i64) -> Result<Option<JobOfferWithCompany>, AppError> {
        let state = self.state.lock();
        Ok(state.offers.get(&id).and_then(|offer| {
            state.companies.get(&offer.company_id).map(|company| JobOfferWithCompany {
                offer: offer.clone(),
                company: company.clone(),
            })
        }))
    }

    async fn list_open(&self) -> Result<Vec<JobOfferWithCompany>, AppError> {
        let state = self.state.lock();
        let mut offers: Vec<_> = state
            .offers
            .values()
            .filter(|o| o.status == JobOfferStatus::Open)
            .filter_map(|offer| {
                state.companies.get(&offer.company_id).map(|company| JobOfferWithCompany {
                    offer: offer.clone(),
                    company: company.clone(),
                })
            })
            .collect();
        offers.sort_by(|a, b| {
            b.offer
                .created_at
                .cmp(&a.offer.created_at)
                .then(b.offer.id.cmp(&a.offer.id))
        });
        Ok(offers)
    }

    async fn find_by_company(&self, company_id: i64) -> Result<Vec<JobOffer>, AppError> {
        let mut offers: Vec<_> = self
            .state
            .lock()
            .offers
            .values()
            .filter(|o| o.company_id == company_id)
            .cloned()
            .collect();
        offers.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(offers)
    }

    async fn create(&self, offer: &JobOffer) -> Result<JobOffer, AppError> {
        let mut state = self.state.lock();
        if !state.companies.contains_key(&offer.company_id) {
            return Err(AppError::NotFound("Company profile not found".into()));
        }
        state.offers.insert(offer.id, offer.clone());
        Ok(offer.clone())
    }

    async fn update(&self, offer: &JobOffer) -> Result<JobOffer, AppError> {
        let mut state = self.state.lock();
        if !state.offers.contains_key(&offer.id) {
            return Err(AppError::NotFound("Job offer not found".into()));
        }
        state.offers.insert(offer.id, offer.clone());
        Ok(offer.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut state = self.state.lock();
        if !state.offers.contains_key(&id) {
            return Err(AppError::NotFound("Job offer not found".into()));
        }
        state.remove_offer(id);
        Ok(())
    }
}

#[async_trait]
impl ApplicationRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Application>, AppError> {
        Ok(self.state.lock().applications.get(&id).cloned())
    }

    async fn exists_for(&self, aspirant_id: i64, job_offer_id: i64) -> Result<bool, AppError> {
        if self.skip_duplicate_precheck.load(Ordering::SeqCst) {
            return Ok(false);
        }
        Ok(self
            .state
            .lock()
            .applications
            .values()
            .any(|a| a.aspirant_id == aspirant_id && a.job_offer_id == job_offer_id))
    }

    async fn create(&self, application: &Application) -> Result<Application, AppError> {
        let mut state = self.state.lock();
        let duplicate = state.applications.values().any(|a| {
            a.aspirant_id == application.aspirant_id && a.job_offer_id == application.job_offer_id
        });
        if duplicate {
            return Err(AppError::Conflict(
                "You have already applied to this job offer".into(),
            ));
        }
        if !state.offers.contains_key(&application.job_offer_id) {
            return Err(AppError::NotFound("Job offer not found".into()));
        }
        if !state.aspirants.contains_key(&application.aspirant_id) {
            return Err(AppError::NotFound("Aspirant profile not found".into()));
        }
        state.applications.insert(application.id, application.clone());
        Ok(application.clone())
    }

    async fn find_by_aspirant(
        &self,
        aspirant_id: i64,
    ) -> Result<Vec<ApplicationWithOffer>, AppError> {
        let state = self.state.lock();
        let mut applications: Vec<_> = state
            .applications
            .values()
            .filter(|a| a.aspirant_id == aspirant_id)
            .cloned()
            .collect();
        State::newest_first(&mut applications);

        Ok(applications
            .into_iter()
            .filter_map(|application| {
                let job_offer = state.offers.get(&application.job_offer_id)?.clone();
                let company = state.companies.get(&job_offer.company_id)?.clone();
                Some(ApplicationWithOffer {
                    application,
                    job_offer,
                    company,
                })
            })
            .collect())
    }

    async fn find_by_company_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<ApplicationWithAspirant>, AppError> {
        let state = self.state.lock();
        let mut applications: Vec<_> = state
            .applications
            .values()
            .filter(|a| {
                state
                    .offers
                    .get(&a.job_offer_id)
                    .and_then(|o| state.companies.get(&o.company_id))
                    .is_some_and(|c| c.user_id == user_id)
            })
            .cloned()
            .collect();
        State::newest_first(&mut applications);

        Ok(applications
            .into_iter()
            .filter_map(|application| {
                let job_offer = state.offers.get(&application.job_offer_id)?.clone();
                let aspirant = state.aspirants.get(&application.aspirant_id)?.clone();
                Some(ApplicationWithAspirant {
                    application,
                    job_offer,
                    aspirant,
                })
            })
            .collect())
    }

    async fn update_status(
        &self,
        id: i64,
        status: ApplicationStatus,
        internal_note: Option<String>,
    ) -> Result<Application, AppError> {
        let mut state = self.state.lock();
        let application = state
            .applications
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Application not found".into()))?;

        application.status = status;
        if internal_note.is_some() {
            application.internal_note = internal_note;
        }
        Ok(application.clone())
    }
}

#[async_trait]
impl OwnershipResolver for MemoryStore {
    async fn resolve_owner(&self, entity: OwnedEntity) -> Result<Option<i64>, AppError> {
        let state = self.state.lock();
        let company_owner = |offer_id: i64| {
            state
                .offers
                .get(&offer_id)
                .and_then(|o| state.companies.get(&o.company_id))
                .map(|c| c.user_id)
        };
        let aspirant_owner = |profile_id: i64| state.aspirants.get(&profile_id).map(|p| p.user_id);

        Ok(match entity {
            OwnedEntity::JobOffer(id) => company_owner(id),
            OwnedEntity::Application(id) => state
                .applications
                .get(&id)
                .and_then(|a| company_owner(a.job_offer_id)),
            OwnedEntity::SkillItem(id) => {
                state.skills.get(&id).and_then(|s| aspirant_owner(s.profile_id))
            }
            OwnedEntity::ExperienceItem(id) => state
                .experience
                .get(&id)
                .and_then(|e| aspirant_owner(e.profile_id)),
        })
    }
}

pub type MemoryAuthService = AuthServiceImpl<MemoryStore>;
pub type MemoryApplicationService =
    ApplicationServiceImpl<MemoryStore, MemoryStore, MemoryStore, MemoryStore>;
pub type MemoryJobOfferService = JobOfferServiceImpl<MemoryStore, MemoryStore, MemoryStore>;
pub type MemoryAspirantProfileService =
    AspirantProfileServiceImpl<MemoryStore, MemoryStore, MemoryStore, MemoryStore>;
pub type MemoryCompanyProfileService = CompanyProfileServiceImpl<MemoryStore, MemoryStore>;

// One generator for every test so seeded and service-made ids never collide.
static IDS: Lazy<Arc<SnowflakeGenerator>> =
    Lazy::new(|| Arc::new(SnowflakeGenerator::new(1, DEFAULT_EPOCH)));

pub fn id_generator() -> Arc<SnowflakeGenerator> {
    IDS.clone()
}

pub fn auth_service(store: &Arc<MemoryStore>) -> MemoryAuthService {
    AuthServiceImpl::new(
        store.clone(),
        id_generator(),
        TokenCodec::new(&JwtSettings {
            secret: "test-secret-key-that-is-long-enough".into(),
            access_token_expiry_minutes: 15,
        }),
    )
}

pub fn application_service(store: &Arc<MemoryStore>, policy: StatusPolicy) -> MemoryApplicationService {
    ApplicationServiceImpl::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        id_generator(),
        policy,
    )
}

pub fn job_offer_service(store: &Arc<MemoryStore>) -> MemoryJobOfferService {
    JobOfferServiceImpl::new(store.clone(), store.clone(), store.clone(), id_generator())
}

pub fn aspirant_profile_service(store: &Arc<MemoryStore>) -> MemoryAspirantProfileService {
    AspirantProfileServiceImpl::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        id_generator(),
    )
}

pub fn company_profile_service(store: &Arc<MemoryStore>) -> MemoryCompanyProfileService {
    CompanyProfileServiceImpl::new(store.clone(), store.clone(), id_generator())
}

/// Insert a user with its default profile, bypassing password hashing.
pub async fn seed_user(
    store: &Arc<MemoryStore>,
    email: &str,
    role: UserRole,
    company_name: Option<&str>,
) -> User {
    let ids = id_generator();
    let user = User::new(ids.generate(), email, "unused".into(), role);
    let profile = match role {
        UserRole::Aspirant => {
            DefaultProfile::Aspirant(AspirantProfile::placeholder(ids.generate(), user.id, email))
        }
        UserRole::Company => DefaultProfile::Company(CompanyProfile::placeholder(
            ids.generate(),
            user.id,
            company_name,
            email,
        )),
    };
    UserRepository::create_with_profile(store.as_ref(), &user, &profile)
        .await
        .expect("seed user")
}

/// Insert a user with no profile at all.
pub fn seed_bare_user(store: &Arc<MemoryStore>, email: &str, role: UserRole) -> User {
    let user = User::new(id_generator().generate(), email, "unused".into(), role);
    store.state.lock().users.insert(user.id, user.clone());
    user
}

/// Publish an open offer for an already seeded company user.
pub async fn seed_offer(store: &Arc<MemoryStore>, company_user_id: i64, title: &str) -> JobOffer {
    let company = store.company_profile_of(company_user_id).expect("company profile");
    let offer = JobOffer {
        id: id_generator().generate(),
        company_id: company.id,
        title: title.to_string(),
        description: "Build and run services".into(),
        location: "Remote".into(),
        salary_range: "50k-70k".into(),
        status: JobOfferStatus::Open,
        created_at: Utc::now(),
    };
    JobOfferRepository::create(store.as_ref(), &offer)
        .await
        .expect("seed offer")
}
