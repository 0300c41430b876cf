use instiprofile_core::db::open_db_in_memory;
use instiprofile_core::{
    AccountId, AccountRepository, ApplicationId, RecordValidationError, RepoError, SentMessage,
    SentMessageQuery, SentMessageRepository, SqliteAccountRepository,
    SqliteSentMessageRepository,
};
use rusqlite::Connection;
use uuid::Uuid;

struct Owners {
    alice: AccountId,
    bob: AccountId,
    mailer: ApplicationId,
    pager: ApplicationId,
}

fn register_owners(conn: &Connection) -> Owners {
    let accounts = SqliteAccountRepository::try_new(conn).unwrap();
    Owners {
        alice: accounts.create_account(Uuid::new_v4(), "alice").unwrap(),
        bob: accounts.create_account(Uuid::new_v4(), "bob").unwrap(),
        mailer: accounts
            .create_application(Uuid::new_v4(), "mailer")
            .unwrap(),
        pager: accounts.create_application(Uuid::new_v4(), "pager").unwrap(),
    }
}

#[test]
fn record_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let owners = register_owners(&conn);
    let repo = SqliteSentMessageRepository::try_new(&conn).unwrap();

    let message = SentMessage::new(owners.mailer, owners.alice, "<id-1@mailer>", 1_000)
        .failed("recipient mailbox unavailable");
    repo.record_message(&message).unwrap();

    let loaded = repo.get_message(message.id).unwrap().unwrap();
    assert_eq!(loaded, message);
    assert!(!loaded.status);
    assert_eq!(loaded.created_at, 1_000);
}

#[test]
fn get_missing_message_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSentMessageRepository::try_new(&conn).unwrap();
    assert!(repo.get_message(Uuid::new_v4()).unwrap().is_none());
}

#[test]
fn stored_messages_cannot_be_updated() {
    let conn = open_db_in_memory().unwrap();
    let owners = register_owners(&conn);
    let repo = SqliteSentMessageRepository::try_new(&conn).unwrap();

    let message = SentMessage::new(owners.mailer, owners.alice, "msg", 1_000);
    repo.record_message(&message).unwrap();

    let err = conn
        .execute("UPDATE sent_messages SET status = 0;", [])
        .unwrap_err();
    assert!(err.to_string().contains("append-only"));

    let loaded = repo.get_message(message.id).unwrap().unwrap();
    assert!(loaded.status);
}

#[test]
fn messages_require_registered_sender_and_recipient() {
    let conn = open_db_in_memory().unwrap();
    let owners = register_owners(&conn);
    let repo = SqliteSentMessageRepository::try_new(&conn).unwrap();

    let unknown_sender = SentMessage::new(Uuid::new_v4(), owners.alice, "msg", 1_000);
    assert!(matches!(
        repo.record_message(&unknown_sender),
        Err(RepoError::MissingOwner("sent message"))
    ));

    let empty_id = SentMessage::new(owners.mailer, owners.alice, "", 1_000);
    assert!(matches!(
        repo.record_message(&empty_id),
        Err(RepoError::Validation(RecordValidationError::EmptyField(
            "message_id"
        )))
    ));
}

#[test]
fn list_filters_by_recipient_sender_and_status() {
    let conn = open_db_in_memory().unwrap();
    let owners = register_owners(&conn);
    let repo = SqliteSentMessageRepository::try_new(&conn).unwrap();

    let to_alice = SentMessage::new(owners.mailer, owners.alice, "a-1", 1_000);
    let to_alice_failed =
        SentMessage::new(owners.pager, owners.alice, "a-2", 2_000).failed("timeout");
    let to_bob = SentMessage::new(owners.mailer, owners.bob, "b-1", 3_000);
    for message in [&to_alice, &to_alice_failed, &to_bob] {
        repo.record_message(message).unwrap();
    }

    let alice_inbox = repo
        .list_messages(&SentMessageQuery {
            account_id: Some(owners.alice),
            ..SentMessageQuery::default()
        })
        .unwrap();
    assert_eq!(alice_inbox, vec![to_alice_failed.clone(), to_alice.clone()]);

    let from_mailer = repo
        .list_messages(&SentMessageQuery {
            sender_id: Some(owners.mailer),
            ..SentMessageQuery::default()
        })
        .unwrap();
    assert_eq!(from_mailer, vec![to_bob.clone(), to_alice.clone()]);

    let failures = repo
        .list_messages(&SentMessageQuery {
            status: Some(false),
            ..SentMessageQuery::default()
        })
        .unwrap();
    assert_eq!(failures, vec![to_alice_failed]);
}

#[test]
fn list_pagination_is_newest_first_and_stable() {
    let conn = open_db_in_memory().unwrap();
    let owners = register_owners(&conn);
    let repo = SqliteSentMessageRepository::try_new(&conn).unwrap();

    let messages: Vec<SentMessage> = (0..5)
        .map(|index| {
            SentMessage::new(
                owners.mailer,
                owners.alice,
                format!("msg-{index}"),
                1_000 + index,
            )
        })
        .collect();
    for message in &messages {
        repo.record_message(message).unwrap();
    }

    let page = repo
        .list_messages(&SentMessageQuery {
            limit: Some(2),
            offset: 1,
            ..SentMessageQuery::default()
        })
        .unwrap();
    let ids: Vec<&str> = page.iter().map(|m| m.message_id.as_str()).collect();
    assert_eq!(ids, vec!["msg-3", "msg-2"]);

    let tail = repo
        .list_messages(&SentMessageQuery {
            offset: 3,
            ..SentMessageQuery::default()
        })
        .unwrap();
    let ids: Vec<&str> = tail.iter().map(|m| m.message_id.as_str()).collect();
    assert_eq!(ids, vec!["msg-1", "msg-0"]);
}

#[test]
fn deleting_recipient_cascades_to_messages() {
    let conn = open_db_in_memory().unwrap();
    let owners = register_owners(&conn);
    let repo = SqliteSentMessageRepository::try_new(&conn).unwrap();

    repo.record_message(&SentMessage::new(owners.mailer, owners.alice, "a", 1))
        .unwrap();
    repo.record_message(&SentMessage::new(owners.mailer, owners.bob, "b", 2))
        .unwrap();

    SqliteAccountRepository::try_new(&conn)
        .unwrap()
        .delete_account(owners.alice)
        .unwrap();

    let remaining = repo.list_messages(&SentMessageQuery::default()).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].account_id, owners.bob);
}
