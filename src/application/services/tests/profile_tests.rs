//! Aspirant and company profile tests

use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use super::common::*;
use crate::application::services::{
    AspirantProfileInput, AspirantProfilePatch, AspirantProfileService, CompanyProfileInput,
    CompanyProfilePatch, CompanyProfileService, CreateJobOfferDto, ExperiencePatch,
    JobOfferService, NewExperience, NewSkill, ProfileError, SkillPatch,
};
use crate::domain::{SkillLevel, UserRole};
use crate::shared::error::AppError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn skill(name: &str, score: u8) -> NewSkill {
    NewSkill {
        skill_name: name.to_string(),
        level: SkillLevel::from_score(score),
    }
}

fn job(title: &str, start: NaiveDate, end: Option<NaiveDate>) -> NewExperience {
    NewExperience {
        title: title.to_string(),
        company: "Initech".into(),
        start_date: start,
        end_date: end,
        description: None,
    }
}

fn profile_input(email: &str) -> AspirantProfileInput {
    AspirantProfileInput {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: email.to_string(),
        phone: Some("+44 20 0000".into()),
        bio: None,
        linkedin_url: None,
        portfolio_url: None,
        current_job_title: Some("Engineer".into()),
        photo_url: None,
        cv_url: None,
        skills: vec![skill("Rust", 5), skill("SQL", 3)],
        experience: vec![job("Developer", date(2020, 1, 1), Some(date(2022, 6, 30)))],
    }
}

#[tokio::test]
async fn test_create_fills_registration_placeholder() {
    let store = MemoryStore::new();
    let user = seed_user(&store, "a1@x.com", UserRole::Aspirant, None).await;
    let placeholder = store.aspirant_profile_of(user.id).unwrap();
    let service = aspirant_profile_service(&store);

    let created = service.create(user.id, profile_input("a1@x.com")).await.unwrap();

    assert_eq!(created.id, placeholder.id);
    assert_eq!(created.full_name(), "Ada Lovelace");
    let names: Vec<_> = created.skills.iter().map(|s| s.skill_name.as_str()).collect();
    assert_eq!(names, vec!["Rust", "SQL"]);
    assert_eq!(created.skills[0].level, SkillLevel::Expert);
    assert_eq!(created.experience.len(), 1);
}

#[tokio::test]
async fn test_create_twice_conflicts() {
    let store = MemoryStore::new();
    let user = seed_user(&store, "a1@x.com", UserRole::Aspirant, None).await;
    let service = aspirant_profile_service(&store);
    service.create(user.id, profile_input("a1@x.com")).await.unwrap();

    let err = service
        .create(user.id, profile_input("a1@x.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProfileError::AlreadyExists));
    assert!(matches!(AppError::from(err), AppError::Conflict(_)));
}

#[tokio::test]
async fn test_create_without_any_profile_inserts_one() {
    let store = MemoryStore::new();
    let user = seed_bare_user(&store, "a1@x.com", UserRole::Aspirant);
    let service = aspirant_profile_service(&store);

    let created = service.create(user.id, profile_input("a1@x.com")).await.unwrap();

    assert_eq!(created.user_id, user.id);
    assert_eq!(service.get_mine(user.id).await.unwrap().skills.len(), 2);
}

#[tokio::test]
async fn test_create_rejects_inverted_date_range() {
    let store = MemoryStore::new();
    let user = seed_user(&store, "a1@x.com", UserRole::Aspirant, None).await;
    let mut input = profile_input("a1@x.com");
    input.experience = vec![job("Developer", date(2022, 1, 1), Some(date(2021, 1, 1)))];

    let err = aspirant_profile_service(&store)
        .create(user.id, input)
        .await
        .unwrap_err();

    assert!(matches!(err, ProfileError::InvalidDateRange));
}

#[tokio::test]
async fn test_update_replaces_only_provided_collections() {
    let store = MemoryStore::new();
    let user = seed_user(&store, "a1@x.com", UserRole::Aspirant, None).await;
    let service = aspirant_profile_service(&store);
    service.create(user.id, profile_input("a1@x.com")).await.unwrap();

    let updated = service
        .update(
            user.id,
            AspirantProfilePatch {
                bio: Some("Systems programmer".into()),
                skills: Some(vec![skill("Go", 2)]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.first_name, "Ada");
    assert_eq!(updated.bio.as_deref(), Some("Systems programmer"));
    assert_eq!(updated.skills.len(), 1);
    assert_eq!(updated.skills[0].skill_name, "Go");
    assert_eq!(updated.skills[0].level, SkillLevel::Basic);
    assert_eq!(updated.experience.len(), 1);
}

#[tokio::test]
async fn test_missing_profile_is_not_found_for_update_and_delete() {
    let store = MemoryStore::new();
    let user = seed_bare_user(&store, "a1@x.com", UserRole::Aspirant);
    let service = aspirant_profile_service(&store);

    assert!(matches!(service.get_mine(user.id).await, Err(ProfileError::NotFound)));
    assert!(matches!(
        service.update(user.id, AspirantProfilePatch::default()).await,
        Err(ProfileError::NotFound)
    ));
    assert!(matches!(service.delete(user.id).await, Err(ProfileError::NotFound)));
}

#[tokio::test]
async fn test_delete_removes_profile() {
    let store = MemoryStore::new();
    let user = seed_user(&store, "a1@x.com", UserRole::Aspirant, None).await;
    let service = aspirant_profile_service(&store);

    service.delete(user.id).await.unwrap();

    assert!(store.aspirant_profile_of(user.id).is_none());
}

#[tokio::test]
async fn test_skill_items_crud() {
    let store = MemoryStore::new();
    let user = seed_user(&store, "a1@x.com", UserRole::Aspirant, None).await;
    let service = aspirant_profile_service(&store);

    let rust = service.add_skill(user.id, skill("Rust", 4)).await.unwrap();
    let duplicate = service.add_skill(user.id, skill("Rust", 1)).await;
    let promoted = service
        .update_skill(
            user.id,
            rust.id,
            SkillPatch {
                level: Some(SkillLevel::Expert),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(matches!(duplicate, Err(ProfileError::Conflict(_))));
    assert_eq!(promoted.skill_name, "Rust");
    assert_eq!(promoted.level, SkillLevel::Expert);

    service.remove_skill(user.id, rust.id).await.unwrap();
    assert!(service.list_skills(user.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_other_aspirant_cannot_touch_skill() {
    let store = MemoryStore::new();
    let owner = seed_user(&store, "a1@x.com", UserRole::Aspirant, None).await;
    let other = seed_user(&store, "a2@x.com", UserRole::Aspirant, None).await;
    let service = aspirant_profile_service(&store);
    let rust = service.add_skill(owner.id, skill("Rust", 4)).await.unwrap();

    let update = service
        .update_skill(other.id, rust.id, SkillPatch::default())
        .await;
    let remove = service.remove_skill(other.id, rust.id).await;
    let missing = service.remove_skill(owner.id, 777).await.unwrap_err();

    assert!(matches!(update, Err(ProfileError::Forbidden)));
    assert!(matches!(remove, Err(ProfileError::Forbidden)));
    assert_eq!(missing.to_string(), "Skill not found");
}

#[tokio::test]
async fn test_list_without_profile_is_empty_but_add_is_not_found() {
    let store = MemoryStore::new();
    let user = seed_bare_user(&store, "a1@x.com", UserRole::Aspirant);
    let service = aspirant_profile_service(&store);

    assert!(service.list_skills(user.id).await.unwrap().is_empty());
    assert!(service.list_experience(user.id).await.unwrap().is_empty());
    assert!(matches!(
        service.add_skill(user.id, skill("Rust", 3)).await,
        Err(ProfileError::NotFound)
    ));
    assert!(matches!(
        service
            .add_experience(user.id, job("Dev", date(2020, 1, 1), None))
            .await,
        Err(ProfileError::NotFound)
    ));
}

#[tokio::test]
async fn test_experience_items_crud() {
    let store = MemoryStore::new();
    let user = seed_user(&store, "a1@x.com", UserRole::Aspirant, None).await;
    let service = aspirant_profile_service(&store);

    let current = service
        .add_experience(user.id, job("Lead", date(2023, 3, 1), None))
        .await
        .unwrap();
    assert!(current.is_current());

    let ended = service
        .update_experience(
            user.id,
            current.id,
            ExperiencePatch {
                end_date: Some(date(2024, 2, 29)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(!ended.is_current());

    let inverted = service
        .update_experience(
            user.id,
            current.id,
            ExperiencePatch {
                end_date: Some(date(2020, 1, 1)),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(inverted, Err(ProfileError::InvalidDateRange)));

    service.remove_experience(user.id, current.id).await.unwrap();
    assert!(service.list_experience(user.id).await.unwrap().is_empty());
}

fn company_input(name: &str, email: &str) -> CompanyProfileInput {
    CompanyProfileInput {
        company_name: name.to_string(),
        email: email.to_string(),
        description: Some("We make things".into()),
        website: Some("https://acme.example".into()),
        logo_url: None,
    }
}

#[tokio::test]
async fn test_company_create_requires_company_role() {
    let store = MemoryStore::new();
    let aspirant = seed_user(&store, "a1@x.com", UserRole::Aspirant, None).await;

    let err = company_profile_service(&store)
        .create(aspirant.id, UserRole::Aspirant, company_input("Acme", "a1@x.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProfileError::Forbidden));
}

#[tokio::test]
async fn test_company_create_fills_placeholder_then_conflicts() {
    let store = MemoryStore::new();
    let company = seed_user(&store, "c1@x.com", UserRole::Company, None).await;
    let placeholder = store.company_profile_of(company.id).unwrap();
    let service = company_profile_service(&store);

    let created = service
        .create(company.id, UserRole::Company, company_input("Acme", "c1@x.com"))
        .await
        .unwrap();
    let again = service
        .create(company.id, UserRole::Company, company_input("Acme 2", "c1@x.com"))
        .await;

    assert_eq!(created.id, placeholder.id);
    assert_eq!(created.company_name, "Acme");
    assert!(matches!(again, Err(ProfileError::AlreadyExists)));
}

#[tokio::test]
async fn test_company_profile_lists_its_offers() {
    let store = MemoryStore::new();
    let company = seed_user(&store, "c1@x.com", UserRole::Company, Some("Acme")).await;
    job_offer_service(&store)
        .create(
            company.id,
            CreateJobOfferDto {
                title: "Backend Engineer".into(),
                description: "Rust".into(),
                location: "Remote".into(),
                salary_range: "60k".into(),
                status: None,
            },
        )
        .await
        .unwrap();
    let service = company_profile_service(&store);

    let mine = service.get_mine(company.id).await.unwrap();
    let public = service.get(mine.profile.id).await.unwrap();

    assert_eq!(mine.offers.len(), 1);
    assert_eq!(public.profile.company_name, "Acme");
    assert_eq!(public.offers[0].title, "Backend Engineer");
    assert!(matches!(service.get(1).await, Err(ProfileError::NotFound)));
}

#[tokio::test]
async fn test_company_update_name_clash_is_conflict() {
    let store = MemoryStore::new();
    seed_user(&store, "c1@x.com", UserRole::Company, Some("Acme")).await;
    let other = seed_user(&store, "c2@x.com", UserRole::Company, Some("Globex")).await;
    let service = company_profile_service(&store);

    let err = service
        .update(
            other.id,
            CompanyProfilePatch {
                company_name: Some("Acme".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    let renamed = service
        .update(
            other.id,
            CompanyProfilePatch {
                website: Some("https://globex.example".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(matches!(err, ProfileError::Conflict(_)));
    assert_eq!(renamed.company_name, "Globex");
    assert_eq!(renamed.website.as_deref(), Some("https://globex.example"));
}
