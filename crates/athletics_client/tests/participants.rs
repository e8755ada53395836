use athletics_client::http_client::ReqwestAthleticsClient;
use athletics_client::retry::RetryPolicy;
use athletics_client::{
    AgeGroup, AthleticsClient, AthleticsError, CompetitionResult, Discipline, DisciplineRef,
    Gender, Participant, ParticipantFilter, ResultKind,
};
use chrono::NaiveDate;
use secrecy::SecretString;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn anna() -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "firstName": "Anna",
        "lastName": "Holm",
        "gender": "FEMALE",
        "age": 12,
        "club": "Storm",
        "disciplines": [],
        "results": []
    })
}

#[tokio::test]
async fn list_participants_sends_bearer_token_and_derives_age_group() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/participants"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([anna()])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReqwestAthleticsClient::new(&server.uri(), Some(SecretString::new("tok".into())));
    let participants = client.list_participants().await.expect("participants");
    assert_eq!(participants.len(), 1);
    assert_eq!(participants[0].full_name(), "Anna Holm");
    assert_eq!(participants[0].age_group(), Some(AgeGroup::Youth));
}

#[tokio::test]
async fn get_participant_maps_404_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/participants/99"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such participant"))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReqwestAthleticsClient::new(&server.uri(), None);
    let err = client.get_participant(99).await.unwrap_err();
    match err {
        AthleticsError::NotFound(body) => assert!(body.contains("no such participant")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn create_participant_posts_camel_case_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/participants"))
        .and(body_partial_json(serde_json::json!({
            "firstName": "Anna",
            "lastName": "Holm",
            "gender": "FEMALE",
            "age": 12,
            "ageGroup": "YOUTH"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(anna()))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReqwestAthleticsClient::new(&server.uri(), None);
    let new = Participant::new("Anna", "Holm", Gender::Female, Some(12), "Storm");
    let created = client.create_participant(&new).await.expect("created");
    assert_eq!(created.id, Some(1));
}

#[tokio::test]
async fn create_participant_rejects_blank_name_without_calling_store() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let client = ReqwestAthleticsClient::new(&server.uri(), None);
    let blank = Participant::new(" ", "Holm", Gender::Female, Some(12), "");
    let err = client.create_participant(&blank).await.unwrap_err();
    assert!(matches!(err, AthleticsError::InvalidInput(_)));
}

#[tokio::test]
async fn search_participants_passes_name_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/participants/search"))
        .and(query_param("name", "Holm"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([anna()])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReqwestAthleticsClient::new(&server.uri(), None);
    let found = client.search_participants(" Holm ").await.expect("search");
    assert_eq!(found.len(), 1);
}

#[tokio::test]
async fn filter_participants_uses_age_band_label() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/participants/filter"))
        .and(query_param("ageGroup", "10-13"))
        .and(query_param("gender", "FEMALE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([anna()])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReqwestAthleticsClient::new(&server.uri(), None);
    let filter = ParticipantFilter {
        gender: Some(Gender::Female),
        age_group: Some(AgeGroup::Youth),
        ..Default::default()
    };
    let found = client.filter_participants(&filter).await.expect("filter");
    assert_eq!(found[0].first_name, "Anna");
}

#[tokio::test]
async fn empty_filter_lists_everyone() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/participants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReqwestAthleticsClient::new(&server.uri(), None);
    let found = client
        .filter_participants(&ParticipantFilter::default())
        .await
        .expect("filter");
    assert!(found.is_empty());
}

#[tokio::test]
async fn delete_participant_accepts_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/participants/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReqwestAthleticsClient::new(&server.uri(), None);
    client.delete_participant(1).await.expect("deleted");
}

#[tokio::test]
async fn add_discipline_to_participant_returns_updated_participant() {
    let server = MockServer::start().await;
    let mut body = anna();
    body["disciplines"] = serde_json::json!([{"id": 3, "name": "60m", "resultType": "TIME"}]);
    Mock::given(method("POST"))
        .and(path("/api/participants/1/disciplines/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReqwestAthleticsClient::new(&server.uri(), None);
    let updated = client
        .add_discipline_to_participant(1, 3)
        .await
        .expect("updated");
    assert_eq!(updated.disciplines.len(), 1);
    assert_eq!(updated.disciplines[0].name, "60m");
}

#[tokio::test]
async fn reads_are_retried_on_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/participants/1"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/participants/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(anna()))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReqwestAthleticsClient::new(&server.uri(), None).with_retry_policy(RetryPolicy {
        max_retries: 2,
        base_delay: std::time::Duration::from_millis(1),
    });
    let p = client.get_participant(1).await.expect("participant");
    assert_eq!(p.id, Some(1));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/participants"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = ReqwestAthleticsClient::new(&server.uri(), None);
    let err = client.list_participants().await.unwrap_err();
    match err {
        AthleticsError::Decode(msg) => assert!(msg.contains("oops")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn update_participant_puts_full_body_to_its_id() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/participants/1"))
        .and(body_partial_json(serde_json::json!({
            "firstName": "Anna",
            "lastName": "Holm",
            "age": 14,
            "ageGroup": "JUNIOR",
            "club": "Tyrving"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 1,
            "firstName": "Anna",
            "lastName": "Holm",
            "gender": "FEMALE",
            "age": 14,
            "club": "Tyrving"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReqwestAthleticsClient::new(&server.uri(), None);
    let mut anna = Participant::new("Anna", "Holm", Gender::Female, Some(14), "Tyrving");
    anna.id = Some(1);
    let updated = client.update_participant(1, &anna).await.expect("updated");
    assert_eq!(updated.club, "Tyrving");
    assert_eq!(updated.age_group(), Some(AgeGroup::Junior));
}

#[tokio::test]
async fn update_participant_discipline_uses_nested_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/participants/1/disciplines/3"))
        .and(body_partial_json(
            serde_json::json!({"name": "60 m sprint", "resultType": "TIME"}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({"id": 3, "name": "60 m sprint", "resultType": "TIME"}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReqwestAthleticsClient::new(&server.uri(), None);
    let discipline = Discipline::new("60 m sprint", ResultKind::Time);
    let updated = client
        .update_participant_discipline(1, 3, &discipline)
        .await
        .expect("updated");
    assert_eq!(updated.id, Some(3));
    assert_eq!(updated.name, "60 m sprint");
}

#[tokio::test]
async fn update_participant_result_puts_to_result_under_discipline() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/participants/1/disciplines/3/results/7"))
        .and(body_partial_json(serde_json::json!({
            "date": "2025-06-15",
            "resultValue": 9650.0,
            "discipline": {"id": 3, "resultType": "TIME"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 7,
            "date": "2025-06-15",
            "resultValue": 9650.0,
            "discipline": {"id": 3, "name": "60m", "resultType": "TIME"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReqwestAthleticsClient::new(&server.uri(), None);
    let result = CompetitionResult {
        id: Some(7),
        date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
        result_value: 9_650.0,
        discipline: DisciplineRef {
            id: Some(3),
            name: "60m".into(),
            result_type: ResultKind::Time,
        },
        participant_id: Some(1),
    };
    let stored = client
        .update_participant_result(1, 3, 7, &result)
        .await
        .expect("stored");
    assert_eq!(stored.display_value().unwrap(), "00:00:09.65");
}
