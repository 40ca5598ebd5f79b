use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct TaskSnap {
    id: String,
    text: String,
    completed: bool,
}

#[derive(Debug, Deserialize)]
struct DaySnap {
    id: String,
    date: String,
    day_num: u32,
    tasks: Vec<TaskSnap>,
}

#[derive(Debug, Deserialize)]
struct HabitSnap {
    id: String,
    name: String,
    progress: BTreeMap<u32, bool>,
}

#[derive(Debug, Deserialize)]
struct StateSnap {
    owner: String,
    anchor: String,
    days: Vec<DaySnap>,
    habits: Vec<HabitSnap>,
}

#[derive(Debug, Deserialize)]
struct BarSnap {
    done: usize,
    total: usize,
    height: f64,
}

#[derive(Debug, Deserialize)]
struct DashboardSnap {
    completion_rate: u32,
    completed_tasks: usize,
    total_tasks: usize,
    day_bars: Vec<BarSnap>,
    habits: Vec<HabitSummarySnap>,
}

#[derive(Debug, Deserialize)]
struct HabitSummarySnap {
    checks: u32,
    target: u32,
    percent: u32,
}

#[derive(Debug, Deserialize)]
struct SyncSnap {
    message: String,
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
        if let Ok(resp) = client.get(format!("{base_url}/api/state")).send().await {
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
    let child = Command::new(env!("CARGO_BIN_EXE_planner_app"))
        .env("PORT", port.to_string())
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

async fn get_state(client: &Client, base_url: &str) -> StateSnap {
    client
        .get(format!("{base_url}/api/state"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn post_state(client: &Client, base_url: &str, path: &str, body: serde_json::Value) -> StateSnap {
    let response = client
        .post(format!("{base_url}{path}"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success(), "POST {path} failed");
    response.json().await.unwrap()
}

#[tokio::test]
async fn http_state_serves_monday_first_week() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let state = get_state(&client, &server.base_url).await;
    assert_eq!(state.days.len(), 7);
    let ids: Vec<&str> = state.days.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, ["mon", "tue", "wed", "thu", "fri", "sat", "sun"]);
    assert!(!state.owner.is_empty());
    assert!(!state.anchor.is_empty());
}

#[tokio::test]
async fn http_task_add_toggle_delete_roundtrip() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let marker = format!("интеграционная задача {}", std::process::id());
    let before = get_state(&client, &server.base_url).await;
    let count_before = before.days[2].tasks.len();

    let state = post_state(
        &client,
        &server.base_url,
        "/api/tasks/add",
        serde_json::json!({ "day_id": "wed", "text": marker }),
    )
    .await;
    assert_eq!(state.days[2].tasks.len(), count_before + 1);
    let task = state.days[2]
        .tasks
        .iter()
        .find(|t| t.text == marker)
        .expect("added task missing");
    assert!(!task.completed);
    let task_id = task.id.clone();

    let state = post_state(
        &client,
        &server.base_url,
        "/api/tasks/toggle",
        serde_json::json!({ "day_id": "wed", "task_id": task_id }),
    )
    .await;
    let task = state.days[2].tasks.iter().find(|t| t.id == task_id).unwrap();
    assert!(task.completed);

    let state = post_state(
        &client,
        &server.base_url,
        "/api/tasks/delete",
        serde_json::json!({ "day_id": "wed", "task_id": task_id }),
    )
    .await;
    assert_eq!(state.days[2].tasks.len(), count_before);
}

#[tokio::test]
async fn http_blank_task_text_is_rejected_silently() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = get_state(&client, &server.base_url).await;
    let state = post_state(
        &client,
        &server.base_url,
        "/api/tasks/add",
        serde_json::json!({ "day_id": "thu", "text": "   " }),
    )
    .await;
    assert_eq!(state.days[3].tasks.len(), before.days[3].tasks.len());
}

#[tokio::test]
async fn http_anchor_change_realigns_dates() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let state = post_state(
        &client,
        &server.base_url,
        "/api/week/anchor",
        serde_json::json!({ "date": "2025-11-26" }),
    )
    .await;
    assert_eq!(state.anchor, "2025-11-26");
    assert_eq!(state.days[0].date, "24 ноября");
    assert_eq!(state.days[0].day_num, 24);
    assert_eq!(state.days[6].date, "30 ноября");

    let response = client
        .post(format!("{}/api/week/anchor", server.base_url))
        .json(&serde_json::json!({ "date": "не дата" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_habit_lifecycle() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let marker = format!("трекер {}", std::process::id());
    let state = post_state(
        &client,
        &server.base_url,
        "/api/habits/add",
        serde_json::json!({ "name": marker }),
    )
    .await;
    let habit = state
        .habits
        .iter()
        .find(|h| h.name == marker)
        .expect("added habit missing");
    assert!(habit.progress.is_empty());
    let habit_id = habit.id.clone();

    let state = post_state(
        &client,
        &server.base_url,
        "/api/habits/toggle",
        serde_json::json!({ "habit_id": habit_id, "day": 12 }),
    )
    .await;
    let habit = state.habits.iter().find(|h| h.id == habit_id).unwrap();
    assert_eq!(habit.progress.get(&12), Some(&true));

    let state = post_state(
        &client,
        &server.base_url,
        "/api/habits/delete",
        serde_json::json!({ "habit_id": habit_id }),
    )
    .await;
    assert!(state.habits.iter().all(|h| h.id != habit_id));
    let count = state.habits.len();

    // Toggling the deleted habit must not resurrect it.
    let state = post_state(
        &client,
        &server.base_url,
        "/api/habits/toggle",
        serde_json::json!({ "habit_id": habit_id, "day": 1 }),
    )
    .await;
    assert_eq!(state.habits.len(), count);
}

#[tokio::test]
async fn http_dashboard_matches_state() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let state = get_state(&client, &server.base_url).await;
    let total: usize = state.days.iter().map(|d| d.tasks.len()).sum();
    let done: usize = state
        .days
        .iter()
        .map(|d| d.tasks.iter().filter(|t| t.completed).count())
        .sum();

    let dash: DashboardSnap = client
        .get(format!("{}/api/dashboard", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(dash.total_tasks, total);
    assert_eq!(dash.completed_tasks, done);
    let expected = if total == 0 {
        0
    } else {
        (done as f64 / total as f64 * 100.0).round() as u32
    };
    assert_eq!(dash.completion_rate, expected);
    assert_eq!(dash.day_bars.len(), 7);
    for bar in &dash.day_bars {
        assert!(bar.height >= 2.0);
        assert!(bar.done <= bar.total);
    }
    let seeded = state.habits.iter().find(|h| h.id == "h1");
    if let Some(h1) = seeded {
        let expected: u32 = h1.progress.values().filter(|done| **done).count() as u32;
        let summary = &dash.habits[0];
        assert_eq!(summary.checks, expected);
    }
    for habit in &dash.habits {
        assert_eq!(habit.target, 31);
        assert!(habit.percent <= 100);
    }
}

#[tokio::test]
async fn http_owner_rename_and_sync_stub() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let state = post_state(
        &client,
        &server.base_url,
        "/api/owner",
        serde_json::json!({ "name": "Андрея" }),
    )
    .await;
    assert_eq!(state.owner, "Андрея");

    let before = get_state(&client, &server.base_url).await;
    let sync: SyncSnap = client
        .post(format!("{}/api/sync", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!sync.message.is_empty());

    let after = get_state(&client, &server.base_url).await;
    assert_eq!(after.owner, before.owner);
    assert_eq!(after.days.len(), before.days.len());
    assert_eq!(after.habits.len(), before.habits.len());
}
