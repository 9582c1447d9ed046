//! WebView-based application shell using `wry` + `tao`.
//!
//! Architecture:
//! - The library page is served via the `sm://` custom protocol with the
//!   shell script inlined.
//! - IPC from JS → Rust via `window.ipc.postMessage()`; every message is a
//!   JSON object `{action, params}` routed through `event_handler`.
//! - The document-level `pointerdown` listener lives in the page script and
//!   reports containment, so the Rust-side menu state machines decide what
//!   closes; card controls stop propagation themselves.
//! - External links are real `target="_blank"` anchors; the new-window
//!   request is denied in the webview and handed to the system browser.

use std::sync::{Arc, Mutex};

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use wry::WebViewBuilder;

use crate::app::App;
use crate::event_handler::handle_event;
use crate::managers::library::LibraryTrait;
use crate::services::api_client::MissingConfigPolicy;

#[derive(Debug)]
enum UserEvent {
    EvalScript(String),
    OpenExternal(String),
}

const SHELL_CSS: &str = r#"
:root{--bg:#0d1117;--card:#161b22;--border:#30363d;--fg:#e6edf3;--muted:#7d8590;--accent:#58a6ff;--danger:#f85149}
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",sans-serif;background:var(--bg);color:var(--fg);padding:24px}
.card-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(260px,1fr));gap:16px}
.card{background:var(--card);border:1px solid var(--border);border-radius:12px;display:flex;flex-direction:column;overflow:hidden}
.card-body{padding:16px;flex:1}
.card-header{display:flex;align-items:center;justify-content:space-between;margin-bottom:12px}
.card-site{display:flex;align-items:center;gap:8px;min-width:0}
.favicon{width:16px;height:16px;border-radius:3px;flex-shrink:0}
.domain{font-size:10px;font-weight:700;text-transform:uppercase;letter-spacing:.08em;color:var(--accent);overflow:hidden;text-overflow:ellipsis;white-space:nowrap}
.card-actions{display:flex;align-items:center;gap:2px}
.icon-btn{background:none;border:none;color:var(--muted);cursor:pointer;padding:4px;border-radius:6px;font-size:14px;text-decoration:none}
.icon-btn:hover{color:var(--accent)}
.icon-btn.danger:hover{color:var(--danger)}
.icon-btn.favorite{color:var(--accent)}
.card-title{font-size:14px;font-weight:700;line-height:1.35;margin-bottom:6px;display:-webkit-box;-webkit-line-clamp:2;-webkit-box-orient:vertical;overflow:hidden}
.card-url{font-size:11px;color:var(--muted);overflow:hidden;text-overflow:ellipsis;white-space:nowrap}
.card-footer{padding:10px 16px;border-top:1px solid var(--border);display:flex;align-items:center;justify-content:space-between}
.time{font-size:10px;color:var(--muted)}
.footer-meta{display:flex;align-items:center;gap:8px}
.folder-badge{font-size:9px;font-weight:600;padding:2px 8px;border-radius:999px}
.favorite-marker{color:var(--accent);font-size:12px}
.move-wrap{position:relative}
.move-menu{position:absolute;right:0;top:100%;margin-top:4px;width:176px;background:var(--card);border:1px solid var(--border);border-radius:10px;box-shadow:0 8px 24px rgba(1,4,9,.5);padding:6px 0;z-index:50}
.menu-entry{display:flex;align-items:center;gap:8px;width:100%;text-align:left;background:none;border:none;color:var(--muted);font-size:12px;padding:6px 12px;cursor:pointer}
.menu-entry:hover{background:rgba(255,255,255,.04)}
.menu-entry.current{color:var(--accent);font-weight:600;background:rgba(88,166,255,.08)}
.swatch{width:8px;height:8px;border-radius:50%;flex-shrink:0}
.swatch.unfiled{border:1px solid var(--muted)}
"#;

const SHELL_JS: &str = r#"
function __sm_ipc(action, params){
  window.ipc.postMessage(JSON.stringify({action: action, params: params || {}}));
}
document.addEventListener('pointerdown', function(e){
  var wrap = e.target.closest ? e.target.closest('.move-wrap') : null;
  var inOpenMenu = wrap && wrap.querySelector('.move-menu');
  __sm_ipc('pointer.down', inOpenMenu ? {menu_card_id: wrap.dataset.menuFor} : {});
});
document.addEventListener('click', function(e){
  var btn = e.target.closest ? e.target.closest('[data-action]') : null;
  if(!btn) return;
  e.stopPropagation();
  var card = btn.closest('[data-card-id]');
  var id = card ? card.dataset.cardId : null;
  switch(btn.dataset.action){
    case 'toggle-favorite': __sm_ipc('card.toggle_favorite', {id: id}); break;
    case 'delete': __sm_ipc('card.delete', {id: id}); break;
    case 'menu-toggle': __sm_ipc('card.menu_toggle', {id: id}); break;
    case 'menu-select':
      __sm_ipc('card.menu_select', {id: id, folder_id: btn.dataset.folderId || null});
      break;
  }
});
"#;

/// Builds the library page served over the custom protocol.
fn library_page(grid_html: &str) -> String {
    let mut html = String::with_capacity(grid_html.len() + SHELL_CSS.len() + SHELL_JS.len() + 512);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><style>");
    html.push_str(SHELL_CSS);
    html.push_str("</style></head><body><div id=\"grid\">");
    html.push_str(grid_html);
    html.push_str("</div><script>");
    html.push_str(SHELL_JS);
    html.push_str("</script></body></html>");
    html
}

/// Script that swaps in a freshly rendered card grid.
fn grid_update_script(app: &mut App) -> String {
    let html = app.render_cards(chrono::Utc::now());
    format!(
        "document.getElementById('grid').innerHTML = {};",
        serde_json::json!(html)
    )
}

/// Routes one IPC message and returns the follow-up event for the webview.
fn handle_ipc(app: &Mutex<App>, body: &str) -> Option<UserEvent> {
    let msg: serde_json::Value = serde_json::from_str(body).ok()?;
    let action = msg.get("action").and_then(|v| v.as_str())?;
    let params = msg.get("params").cloned().unwrap_or(serde_json::Value::Null);

    if let Err(err) = handle_event(app, action, &params) {
        eprintln!("[IPC] {} failed: {}", action, err);
    }
    // Every interaction may have changed card or menu state; re-render.
    let mut a = app.lock().ok()?;
    Some(UserEvent::EvalScript(grid_update_script(&mut a)))
}

/// Hands a URL to the system browser.
fn open_external(url: &str) {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return;
    }
    #[cfg(target_os = "linux")]
    let _ = std::process::Command::new("xdg-open").arg(url).spawn();
    #[cfg(target_os = "macos")]
    let _ = std::process::Command::new("open").arg(url).spawn();
    #[cfg(target_os = "windows")]
    let _ = std::process::Command::new("cmd").args(["/C", "start", "", url]).spawn();
}

fn seed_when_empty(app: &mut App) {
    if app.library.bookmark_count() > 0 {
        return;
    }
    let reading = app.library.create_folder("Reading", "#3fb950");
    let _ = app
        .library
        .add_bookmark("https://www.rust-lang.org/learn", "Learn Rust", Some(&reading));
    let _ = app
        .library
        .add_bookmark("https://github.com", "GitHub", None);
    app.sync_cards();
}

/// Main entry point for the webview shell.
pub fn run() {
    let app = App::new(MissingConfigPolicy::Placeholder).expect("Failed to initialize Shelfmark");
    let state = Arc::new(Mutex::new(app));

    {
        let mut a = state.lock().unwrap();
        if !a.client.is_placeholder() {
            let runtime = tokio::runtime::Runtime::new().expect("Failed to start tokio runtime");
            if let Err(err) = runtime.block_on(a.refresh_from_remote()) {
                eprintln!("[SYNC] remote refresh failed: {}", err);
            }
        }
        seed_when_empty(&mut a);
    }

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title("Shelfmark")
        .with_inner_size(tao::dpi::LogicalSize::new(1100.0, 760.0))
        .build(&event_loop)
        .expect("Failed to create window");

    let page_state = state.clone();
    let ipc_state = state.clone();
    let ipc_proxy = proxy.clone();
    let nw_proxy = proxy.clone();

    let builder = WebViewBuilder::new()
        .with_custom_protocol("sm".into(), move |_wv_id, _request| {
            let html = {
                let mut a = page_state.lock().unwrap();
                library_page(&a.render_cards(chrono::Utc::now()))
            };
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(html.into_bytes().into())
                .unwrap()
        })
        .with_url("sm://localhost/library")
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            if let Some(event) = handle_ipc(&ipc_state, msg.body().as_str()) {
                let _ = ipc_proxy.send_event(event);
            }
        })
        .with_new_window_req_handler(move |url, _features| {
            let _ = nw_proxy.send_event(UserEvent::OpenExternal(url));
            wry::NewWindowResponse::Deny
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().expect("Failed to get GTK vbox");
        builder.build_gtk(vbox).expect("Failed to create WebView")
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window).expect("Failed to create WebView");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(user_event) => match user_event {
                UserEvent::EvalScript(js) => {
                    let _ = webview.evaluate_script(&js);
                }
                UserEvent::OpenExternal(url) => {
                    open_external(&url);
                }
            },

            _ => {}
        }
    });
}
