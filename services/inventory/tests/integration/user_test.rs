use inventory::domain::credentials::verify_password;
use inventory::domain::types::SYSTEM_USER_ID;
use inventory::error::InventoryServiceError;
use inventory::usecase::user::{
    AddUserInput, AddUserUseCase, DeleteUserUseCase, ListUsersUseCase, LookupUserUseCase,
    RESET_EMAIL_SUBJECT, ResetPasswordUseCase,
};

use crate::helpers::{InMemoryUserRepo, RecordingMailer, login_usecase, password_from_mail};

#[tokio::test]
async fn should_add_user_who_can_then_log_in() {
    let repo = InMemoryUserRepo::seeded();
    AddUserUseCase { repo: repo.clone() }
        .execute(AddUserInput {
            username: "hank".into(),
            email: "Hank@Example.com".into(),
            password: "pa55word".into(),
            is_admin: false,
        })
        .await
        .unwrap();

    let out = login_usecase(repo.clone())
        .execute("hank", "pa55word")
        .await
        .unwrap();
    let user = out.identity.into_user().unwrap();
    assert_eq!(user.email, "hank@example.com");
    assert!(!user.is_admin);
    assert_eq!(out.token.len(), 32);

    let again = login_usecase(repo.clone())
        .execute("hank", "pa55word")
        .await
        .unwrap();
    assert_eq!(again.token, out.token, "token is stable across logins");
}

#[tokio::test]
async fn should_reject_duplicate_username() {
    let repo = InMemoryUserRepo::seeded().with_user(2, "ivy", "ivy@example.com", "pw", false);
    let result = AddUserUseCase { repo: repo.clone() }
        .execute(AddUserInput {
            username: "ivy".into(),
            email: "other@example.com".into(),
            password: "pw2".into(),
            is_admin: false,
        })
        .await;
    assert!(
        matches!(result, Err(InventoryServiceError::UserAlreadyExists)),
        "expected UserAlreadyExists, got {result:?}"
    );
}

#[tokio::test]
async fn should_never_delete_system_account() {
    let repo = InMemoryUserRepo::seeded().with_user(2, "ivy", "ivy@example.com", "pw", true);
    let delete = DeleteUserUseCase { repo: repo.clone() };
    for actor in [SYSTEM_USER_ID, 2, 42] {
        let result = delete.execute(SYSTEM_USER_ID, actor).await;
        assert!(
            matches!(result, Err(InventoryServiceError::SystemAccount)),
            "expected SystemAccount for actor {actor}, got {result:?}"
        );
    }
    let users = ListUsersUseCase { repo: repo.clone() }.execute().await.unwrap();
    assert!(users.iter().any(|u| u.id == SYSTEM_USER_ID));
}

#[tokio::test]
async fn should_remove_deleted_user_from_listing_and_lookup() {
    let repo = InMemoryUserRepo::seeded().with_user(2, "ivy", "ivy@example.com", "pw", false);
    let lookup = LookupUserUseCase { repo: repo.clone() };
    let target = lookup.execute("ivy", 1).await.unwrap().into_user().unwrap();

    let delete = DeleteUserUseCase { repo: repo.clone() };
    delete.execute(target.id, 1).await.unwrap();

    assert!(!lookup.execute("ivy", 1).await.unwrap().is_valid());
    let users = ListUsersUseCase { repo: repo.clone() }.execute().await.unwrap();
    assert!(users.iter().all(|u| u.username != "ivy"));

    let result = delete.execute(target.id, 1).await;
    assert!(matches!(result, Err(InventoryServiceError::UserNotFound)));

    let login = login_usecase(repo.clone()).execute("ivy", "pw").await;
    assert!(matches!(login, Err(InventoryServiceError::InvalidCredentials)));
}

#[tokio::test]
async fn should_mail_new_password_that_works_for_login() {
    let repo = InMemoryUserRepo::seeded().with_user(2, "jo", "jo@example.com", "old-pw", false);
    let mailer = RecordingMailer::default();
    let sent = mailer.sent_handle();

    ResetPasswordUseCase {
        repo: repo.clone(),
        mailer,
    }
    .execute("jo", "JO@example.com")
    .await
    .unwrap();

    let sent = sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "jo@example.com");
    assert_eq!(sent[0].subject, RESET_EMAIL_SUBJECT);
    let password = password_from_mail(&sent[0].body);
    assert_eq!(password.len(), 12);

    let hash = repo.password_hash("jo").unwrap();
    assert!(verify_password(password, &hash));
    assert!(!verify_password("old-pw", &hash));
}

#[tokio::test]
async fn should_not_mail_or_write_on_email_mismatch() {
    let repo = InMemoryUserRepo::seeded().with_user(2, "jo", "jo@example.com", "old-pw", false);
    let before = repo.password_hash("jo");
    let mailer = RecordingMailer::default();
    let sent = mailer.sent_handle();

    let result = ResetPasswordUseCase {
        repo: repo.clone(),
        mailer,
    }
    .execute("jo", "someone@example.com")
    .await;

    assert!(
        matches!(result, Err(InventoryServiceError::EmailMismatch)),
        "expected EmailMismatch, got {result:?}"
    );
    assert!(sent.lock().unwrap().is_empty());
    assert_eq!(repo.password_hash("jo"), before);
}

#[tokio::test]
async fn should_keep_old_password_when_mail_fails() {
    let repo = InMemoryUserRepo::seeded().with_user(2, "jo", "jo@example.com", "old-pw", false);
    let before = repo.password_hash("jo");

    let result = ResetPasswordUseCase {
        repo: repo.clone(),
        mailer: RecordingMailer::failing(),
    }
    .execute("jo", "jo@example.com")
    .await;

    assert!(matches!(result, Err(InventoryServiceError::EmailUnavailable(_))));
    assert_eq!(repo.password_hash("jo"), before);
    assert!(
        login_usecase(repo.clone())
            .execute("jo", "old-pw")
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn should_refuse_reset_of_system_account() {
    let repo = InMemoryUserRepo::seeded();
    let mailer = RecordingMailer::default();
    let sent = mailer.sent_handle();

    let result = ResetPasswordUseCase {
        repo: repo.clone(),
        mailer,
    }
    .execute("system", "")
    .await;

    // Blank email is rejected before the account is even looked up.
    assert!(matches!(result, Err(InventoryServiceError::MissingParam(_))));

    let result = ResetPasswordUseCase {
        repo: repo.clone(),
        mailer: RecordingMailer::default(),
    }
    .execute("system", "root@example.com")
    .await;
    assert!(matches!(result, Err(InventoryServiceError::SystemAccount)));
    assert!(sent.lock().unwrap().is_empty());
}
