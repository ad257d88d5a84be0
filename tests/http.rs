use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct Goal {
    id: u64,
    task: String,
    difficulty: u8,
    label: String,
    done: bool,
    period: String,
}

#[derive(Debug, Deserialize)]
struct PeriodGroup {
    period: String,
    goals: Vec<Goal>,
}

#[derive(Debug, Deserialize)]
struct Completion {
    completed: usize,
    total: usize,
}

#[derive(Debug, Deserialize)]
struct GoalsResponse {
    groups: Vec<PeriodGroup>,
    completion: Completion,
}

#[derive(Debug, Deserialize)]
struct ToggleResponse {
    id: u64,
    done: bool,
}

#[derive(Debug, Deserialize)]
struct Settings {
    mode: String,
    age: u8,
}

#[derive(Debug, Deserialize)]
struct Theme {
    primary: String,
}

#[derive(Debug, Deserialize)]
struct Dashboard {
    settings: Settings,
    theme: Theme,
    title: String,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/goals")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_vibe_check"))
        .env("PORT", port.to_string())
        .env("VIBE_TIMELINE", "Dec,Jan,Mar")
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn set_mode(client: &Client, base_url: &str, mode: &str) {
    let response = client
        .post(format!("{base_url}/api/settings"))
        .json(&serde_json::json!({ "mode": mode }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
}

async fn goals(client: &Client, base_url: &str) -> GoalsResponse {
    client
        .get(format!("{base_url}/api/goals"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn add_goal(client: &Client, base_url: &str, body: serde_json::Value) -> reqwest::Response {
    client
        .post(format!("{base_url}/api/goals"))
        .json(&body)
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_add_goal_is_labelled_by_current_mode() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    set_mode(&client, &server.base_url, "Pro").await;
    let before = goals(&client, &server.base_url).await;

    let response = add_goal(
        &client,
        &server.base_url,
        serde_json::json!({ "task": "Close the Q1 deal", "difficulty": 8, "period": "Dec" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Goal = response.json().await.unwrap();
    assert_eq!(created.task, "Close the Q1 deal");
    assert_eq!(created.difficulty, 8);
    assert_eq!(created.label, "High Impact");
    assert!(!created.done);

    set_mode(&client, &server.base_url, "Silly").await;
    let after = goals(&client, &server.base_url).await;
    assert_eq!(after.completion.total, before.completion.total + 1);

    let dec = after
        .groups
        .iter()
        .find(|group| group.period == "Dec")
        .expect("missing Dec group");
    let stored = dec
        .goals
        .iter()
        .find(|goal| goal.id == created.id)
        .expect("missing created goal");
    assert_eq!(stored.label, "High Impact");
    assert_eq!(stored.period, "Dec");
}

#[tokio::test]
async fn http_blank_or_out_of_range_goal_is_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = goals(&client, &server.base_url).await;

    let blank = add_goal(
        &client,
        &server.base_url,
        serde_json::json!({ "task": "   ", "difficulty": 3 }),
    )
    .await;
    assert_eq!(blank.status(), StatusCode::BAD_REQUEST);

    let too_hard = add_goal(
        &client,
        &server.base_url,
        serde_json::json!({ "task": "Fly", "difficulty": 11 }),
    )
    .await;
    assert_eq!(too_hard.status(), StatusCode::BAD_REQUEST);

    let after = goals(&client, &server.base_url).await;
    assert_eq!(after.completion.total, before.completion.total);
}

#[tokio::test]
async fn http_edit_toggle_delete_by_stable_id() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = &server.base_url;

    set_mode(&client, base, "Silly").await;
    let first: Goal = add_goal(
        &client,
        base,
        serde_json::json!({ "task": "Knit a scarf", "difficulty": 6, "period": "Jan" }),
    )
    .await
    .json()
    .await
    .unwrap();
    let second: Goal = add_goal(
        &client,
        base,
        serde_json::json!({ "task": "Read a book", "difficulty": 2, "period": "Jan" }),
    )
    .await
    .json()
    .await
    .unwrap();
    assert_eq!(first.label, "Good Luck");
    assert_eq!(second.label, "Baby Steps");

    let deleted = client
        .delete(format!("{base}/api/goals/{}", first.id))
        .send()
        .await
        .unwrap();
    assert!(deleted.status().is_success());

    let toggled: ToggleResponse = client
        .post(format!("{base}/api/goals/{}/toggle", second.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(toggled.id, second.id);
    assert!(toggled.done);

    let edited = client
        .patch(format!("{base}/api/goals/{}", second.id))
        .json(&serde_json::json!({ "task": "Read two books" }))
        .send()
        .await
        .unwrap();
    assert_eq!(edited.status(), StatusCode::NO_CONTENT);

    let stale = client
        .post(format!("{base}/api/goals/{}/toggle", first.id))
        .send()
        .await
        .unwrap();
    assert_eq!(stale.status(), StatusCode::NOT_FOUND);

    let listing = goals(&client, base).await;
    let jan: Vec<&Goal> = listing
        .groups
        .iter()
        .filter(|group| group.period == "Jan")
        .flat_map(|group| group.goals.iter())
        .collect();
    assert!(jan.iter().all(|goal| goal.id != first.id));
    let kept = jan
        .iter()
        .find(|goal| goal.id == second.id)
        .expect("second goal missing");
    assert_eq!(kept.task, "Read two books");
    assert!(kept.done);
    assert!(listing.completion.completed >= 1);
}

#[tokio::test]
async fn http_settings_drive_dashboard_theme() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = &server.base_url;

    let response = client
        .post(format!("{base}/api/settings"))
        .json(&serde_json::json!({ "mode": "Pro", "age": 40 }))
        .send()
        .await
        .unwrap();
    let settings: Settings = response.json().await.unwrap();
    assert_eq!(settings.mode, "Pro");
    assert_eq!(settings.age, 40);

    let dashboard: Dashboard = client
        .get(format!("{base}/api/dashboard"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(dashboard.settings.mode, "Pro");
    assert_eq!(dashboard.theme.primary, "#1E3A8A");
    assert_eq!(dashboard.title, "Executive Life-OS: 2026 Strategy");

    let bad_age = client
        .post(format!("{base}/api/settings"))
        .json(&serde_json::json!({ "age": 99 }))
        .send()
        .await
        .unwrap();
    assert_eq!(bad_age.status(), StatusCode::BAD_REQUEST);

    let page = client.get(format!("{base}/")).send().await.unwrap();
    assert!(page.status().is_success());
    assert!(page.text().await.unwrap().contains("The Resolution Court"));
}
