mod helpers;

use dealdesk_domain::{Notification, UserRole, ID, MILLIS_PER_DAY};
use dealdesk_sdk::{
    APIError, CreateDeliverableInput, CreatePaymentInput, DealdeskSDK, GetNotificationsInput,
    ReminderChannel, ReminderKind, ReminderStatus, StatusCode,
};
use helpers::setup::{spawn_app, NOW};

fn assert_status<T: std::fmt::Debug>(res: Result<T, APIError>, expected: StatusCode) {
    match res {
        Err(APIError::UnexpectedStatusCode(status)) => assert_eq!(status, expected),
        other => panic!("Expected status code {}, got: {:?}", expected, other),
    }
}

#[actix_web::test]
async fn test_status_ok() {
    let (_, sdk) = spawn_app().await;
    assert!(sdk.status.check_health().await.is_ok());
}

#[actix_web::test]
async fn test_requires_tenant_and_user_headers() {
    let (app, sdk) = spawn_app().await;
    assert_status(sdk.notification.unread_count().await, StatusCode::UNAUTHORIZED);

    // Known user id under a foreign tenant
    let user = app.insert_user(&ID::default(), UserRole::Owner).await;
    let foreign = DealdeskSDK::for_user(app.address.clone(), &ID::default(), &user.id);
    assert_status(
        foreign.notification.unread_count().await,
        StatusCode::UNAUTHORIZED,
    );
}

#[actix_web::test]
async fn test_create_deliverable_schedules_reminders() {
    let (app, _) = spawn_app().await;
    let tenant_id = ID::default();
    let user = app.insert_user(&tenant_id, UserRole::Member).await;
    let deal = app.insert_deal(&tenant_id).await;
    let sdk = app.sdk_for(&user);

    let due_date = NOW + 10 * MILLIS_PER_DAY;
    let res = sdk
        .deal
        .create_deliverable(CreateDeliverableInput {
            deal_id: deal.id.clone(),
            title: "Instagram reel".into(),
            due_date: Some(due_date),
            publish_date: None,
        })
        .await
        .expect("To create deliverable");
    assert_eq!(res.deliverable.deal_id, deal.id);
    assert_eq!(res.deliverable.due_date, Some(due_date));

    let reminders = sdk
        .deal
        .get_reminders(deal.id.clone())
        .await
        .expect("To get reminders")
        .reminders;
    assert_eq!(reminders.len(), 2);
    assert_eq!(reminders[0].channel, ReminderChannel::Email);
    assert_eq!(reminders[0].scheduled_for, due_date - 2 * MILLIS_PER_DAY);
    assert_eq!(reminders[1].channel, ReminderChannel::InApp);
    assert_eq!(reminders[1].scheduled_for, due_date);
    for reminder in &reminders {
        assert_eq!(reminder.kind, ReminderKind::DeliverableDue);
        assert_eq!(reminder.status, ReminderStatus::Pending);
    }
}

#[actix_web::test]
async fn test_deliverable_publish_date_schedules_reminders() {
    let (app, _) = spawn_app().await;
    let tenant_id = ID::default();
    let user = app.insert_user(&tenant_id, UserRole::Member).await;
    let deal = app.insert_deal(&tenant_id).await;
    let sdk = app.sdk_for(&user);

    let publish_date = NOW + 20 * MILLIS_PER_DAY;
    let res = sdk
        .deal
        .create_deliverable(CreateDeliverableInput {
            deal_id: deal.id.clone(),
            title: "Launch teaser".into(),
            due_date: None,
            publish_date: Some(publish_date),
        })
        .await
        .expect("To create deliverable");
    assert_eq!(res.deliverable.publish_date, Some(publish_date));

    let reminders = sdk
        .deal
        .get_reminders(deal.id.clone())
        .await
        .expect("To get reminders")
        .reminders;
    assert_eq!(reminders.len(), 2);
    assert_eq!(reminders[0].scheduled_for, publish_date - 2 * MILLIS_PER_DAY);
    assert_eq!(reminders[1].scheduled_for, publish_date);
    assert!(reminders
        .iter()
        .all(|r| r.kind == ReminderKind::PublishDate));
}

#[actix_web::test]
async fn test_create_payment_validates_input() {
    let (app, _) = spawn_app().await;
    let tenant_id = ID::default();
    let user = app.insert_user(&tenant_id, UserRole::Admin).await;
    let deal = app.insert_deal(&tenant_id).await;
    let sdk = app.sdk_for(&user);

    assert_status(
        sdk.deal
            .create_payment(CreatePaymentInput {
                deal_id: deal.id.clone(),
                amount: -5,
                currency: "USD".into(),
                due_date: None,
            })
            .await,
        StatusCode::BAD_REQUEST,
    );

    assert_status(
        sdk.deal
            .create_payment(CreatePaymentInput {
                deal_id: ID::default(),
                amount: 1000,
                currency: "USD".into(),
                due_date: None,
            })
            .await,
        StatusCode::NOT_FOUND,
    );

    let res = sdk
        .deal
        .create_payment(CreatePaymentInput {
            deal_id: deal.id.clone(),
            amount: 1000,
            currency: "eur".into(),
            due_date: Some(NOW + 30 * MILLIS_PER_DAY),
        })
        .await
        .expect("To create payment");
    assert_eq!(res.payment.currency, "EUR");

    let reminders = sdk
        .deal
        .get_reminders(deal.id.clone())
        .await
        .expect("To get reminders")
        .reminders;
    assert_eq!(reminders.len(), 2);
    assert!(reminders.iter().all(|r| r.kind == ReminderKind::PaymentDue));
}

#[actix_web::test]
async fn test_deal_of_other_tenant_is_not_found() {
    let (app, _) = spawn_app().await;
    let user = app.insert_user(&ID::default(), UserRole::Owner).await;
    let other_deal = app.insert_deal(&ID::default()).await;
    let sdk = app.sdk_for(&user);

    assert_status(
        sdk.deal.get_reminders(other_deal.id.clone()).await,
        StatusCode::NOT_FOUND,
    );
    assert_status(
        sdk.deal
            .create_deliverable(CreateDeliverableInput {
                deal_id: other_deal.id,
                title: "Story".into(),
                due_date: None,
                publish_date: None,
            })
            .await,
        StatusCode::NOT_FOUND,
    );
}

#[actix_web::test]
async fn test_notification_inbox() {
    let (app, _) = spawn_app().await;
    let tenant_id = ID::default();
    let user = app.insert_user(&tenant_id, UserRole::Owner).await;
    let sdk = app.sdk_for(&user);

    let mut notifications = vec![];
    for i in 0..3 {
        let notification = Notification::new(
            tenant_id.clone(),
            user.id.clone(),
            "Payment Due".into(),
            format!("Payment #{}", i),
            NOW + i,
        );
        app.ctx
            .repos
            .notifications
            .insert(&notification)
            .await
            .expect("To insert notification");
        notifications.push(notification);
    }

    let inbox = sdk
        .notification
        .get(GetNotificationsInput::default())
        .await
        .expect("To get notifications")
        .notifications;
    assert_eq!(inbox.len(), 3);
    assert_eq!(inbox[0].body, "Payment #2");
    assert_eq!(
        sdk.notification.unread_count().await.unwrap().count,
        3
    );

    let read = sdk
        .notification
        .mark_read(notifications[0].id.clone())
        .await
        .expect("To mark notification read")
        .notification;
    assert_eq!(read.read_at, Some(NOW));
    assert_eq!(
        sdk.notification.unread_count().await.unwrap().count,
        2
    );

    let unread = sdk
        .notification
        .get(GetNotificationsInput {
            unread_only: true,
            ..Default::default()
        })
        .await
        .unwrap()
        .notifications;
    assert_eq!(unread.len(), 2);

    let res = sdk.notification.mark_all_read().await.unwrap();
    assert_eq!(res.updated, 2);
    assert_eq!(
        sdk.notification.unread_count().await.unwrap().count,
        0
    );

    // Another user of the tenant cannot touch this inbox
    let member = app.insert_user(&tenant_id, UserRole::Member).await;
    assert_status(
        app.sdk_for(&member)
            .notification
            .mark_read(notifications[1].id.clone())
            .await,
        StatusCode::NOT_FOUND,
    );
}

#[actix_web::test]
async fn test_notification_limit_is_validated() {
    let (app, _) = spawn_app().await;
    let user = app.insert_user(&ID::default(), UserRole::Owner).await;
    let sdk = app.sdk_for(&user);

    assert_status(
        sdk.notification
            .get(GetNotificationsInput {
                limit: Some(1000),
                ..Default::default()
            })
            .await,
        StatusCode::BAD_REQUEST,
    );
}
