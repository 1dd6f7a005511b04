//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Leaflet glue lives in `assets/js/hazard-map.js` and is evaluated as
//! globals (no ES modules) once the CDN-loaded `L` object exists. This
//! module provides safe Rust wrappers that serialize map config and call
//! those globals, plus the hook that routes map clicks back into Rust.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

// Embed the Leaflet glue at compile time
static HAZARD_MAP_JS: &str = include_str!("../assets/js/hazard-map.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('hazard-map JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the map glue with a wait-for-Leaflet polling loop.
///
/// The glue defines functions like `initHazardMap(...)` via `function`
/// declarations. To ensure they become globally accessible (not
/// block-scoped inside the setInterval callback), they are evaluated at
/// global scope via indirect eval once Leaflet is ready, and each function
/// is then explicitly promoted to `window.*`.
pub fn init_map() {
    // Already initialized (e.g. the map view was remounted); re-evaluating
    // the glue would reset the instance registry under a live map.
    let ready = js_sys::eval("window.__hazMapReady === true")
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    if ready {
        return;
    }

    // Store the script on window so the polling callback can eval it
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__hazMapScripts = {};",
        serde_json::to_string(HAZARD_MAP_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForLeaflet = setInterval(function() {
                if (typeof L !== 'undefined') {
                    clearInterval(waitForLeaflet);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__hazMapScripts);
                    delete window.__hazMapScripts;
                    // Promote function declarations to window explicitly
                    if (typeof initHazardMap !== 'undefined') window.initHazardMap = initHazardMap;
                    if (typeof setHazardMarker !== 'undefined') window.setHazardMarker = setHazardMarker;
                    if (typeof destroyHazardMap !== 'undefined') window.destroyHazardMap = destroyHazardMap;
                    window.__hazMapReady = true;
                    console.log('Hazard map glue initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Create the Leaflet map inside the given container.
///
/// Uses a polling loop to wait for Leaflet to load, the glue to initialize,
/// and the container DOM element to exist before creating the map.
pub fn render_map(container_id: &str, config_json: &str) {
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__hazMapReady &&
                    typeof window.initHazardMap !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.initHazardMap('{container_id}', '{escaped_config}');
                    }} catch(e) {{ console.error('[hazard-map] initHazardMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Route map clicks into Rust.
///
/// The glue's click handler calls `window.__hazMapOnClick(lat, lng)` when
/// defined. The closure is attached to `window` and leaked; remounting the
/// map view simply overwrites it.
pub fn on_map_click(handler: impl FnMut(f64, f64) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(f64, f64)>);
    match web_sys::window() {
        Some(window) => {
            if js_sys::Reflect::set(
                &window,
                &JsValue::from_str("__hazMapOnClick"),
                closure.as_ref(),
            )
            .is_err()
            {
                log::error!("Failed to attach map click handler");
            }
        }
        None => log::error!("No window object; map clicks will not be handled"),
    }
    closure.forget();
}

/// Tear down the map instance in the given container.
pub fn destroy_map(container_id: &str) {
    call_js(&format!(
        "if (window.destroyHazardMap) window.destroyHazardMap('{}');",
        container_id
    ));
}
