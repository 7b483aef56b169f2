use shortid::id_encoders::{IdEncoder, ShortIdEncoder, LONG_FORM_MIN};
use std::{sync::Arc, time::Duration};
use tokio::{task::JoinSet, time::timeout};

const TASK_COUNT: u64 = 256;
const TASK_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Debug, PartialEq, Eq)]
struct Outcome {
    token: String,
    long: Option<String>,
    normalized: String,
    valid: bool,
}

fn evaluate(encoder: &ShortIdEncoder, long_id: &str) -> Outcome {
    let token = encoder.encode_token(long_id);
    let long = encoder.to_long_form(&token);
    let normalized = encoder.normalize_required(&token);
    Outcome {
        token,
        long,
        normalized: normalized.id,
        valid: normalized.valid,
    }
}

fn inputs() -> Vec<String> {
    (0..TASK_COUNT)
        .map(|i| (LONG_FORM_MIN as u64 + i * 39_062_500_000_001).to_string())
        .collect()
}

#[shortid_test::test]
async fn concurrent_calls_match_sequential_calls() {
    let encoder = ShortIdEncoder::default();
    let inputs = inputs();
    let expected: Vec<_> = inputs.iter().map(|id| evaluate(&encoder, id)).collect();

    let mut tasks = JoinSet::new();
    for (idx, input) in inputs.into_iter().enumerate() {
        tasks.spawn_blocking(move || {
            let outcome = evaluate(&encoder, &input);
            (idx, input, outcome)
        });
    }

    let mut count = 0;
    while let Some(result) = timeout(TASK_TIMEOUT, tasks.join_next()).await.expect("Task timed out") {
        let (idx, input, outcome) = result.expect("Task failed");
        assert_eq!(outcome, expected[idx], "input: {input}");
        assert!(outcome.valid);
        assert_eq!(outcome.normalized, input);
        count += 1;
    }
    assert_eq!(count, TASK_COUNT);
}

#[shortid_test::test]
async fn stalled_task_is_reported_by_timeout() {
    let mut tasks = JoinSet::new();
    tasks.spawn_blocking(|| std::thread::sleep(Duration::from_millis(500)));

    let result = timeout(Duration::from_millis(100), tasks.join_next()).await;
    assert!(result.is_err());
    tasks.detach_all();
}

#[shortid_test::test]
async fn concurrent_trait_object_calls() {
    let encoder: Arc<dyn IdEncoder> = Arc::new(ShortIdEncoder::default());

    let mut tasks = JoinSet::new();
    for id in inputs() {
        let encoder = encoder.clone();
        tasks.spawn_blocking(move || {
            let id = id.parse::<u64>().unwrap();
            let token = encoder.obfuscate(id).unwrap();
            (id, encoder.deobfuscate(&token).unwrap())
        });
    }

    let result = timeout(TASK_TIMEOUT * 4, async {
        let mut count = 0;
        while let Some(result) = tasks.join_next().await {
            let (id, decoded) = result.expect("Task failed");
            assert_eq!(id, decoded);
            count += 1;
        }
        count
    })
    .await
    .expect("Tasks timed out");

    assert_eq!(result, TASK_COUNT);
}
