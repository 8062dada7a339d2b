use leptos::*;
use std::future::Future;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

fn local_runtime() -> (tokio::runtime::Runtime, tokio::task::LocalSet) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    (runtime, tokio::task::LocalSet::new())
}

/// Runs `f` inside a current-thread tokio `LocalSet` so `spawn_local` works.
pub fn with_local_runtime<T>(f: impl FnOnce() -> T) -> T {
    let (runtime, local) = local_runtime();
    local.block_on(&runtime, async move { f() })
}

pub fn with_local_runtime_async<F, Fut, T>(f: F) -> T
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    let (runtime, local) = local_runtime();
    local.block_on(&runtime, f())
}

pub async fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    for _ in 0..100 {
        if condition() {
            return true;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    false
}

/// True when the rendered tag carries the boolean attribute `attr`, ignoring
/// utility classes such as `disabled:opacity-50`.
pub fn has_bool_attr(tag: &str, attr: &str) -> bool {
    let needle = format!(" {}", attr);
    tag.match_indices(&needle).any(|(index, _)| {
        matches!(
            tag[index + needle.len()..].chars().next(),
            None | Some(' ') | Some('>') | Some('=') | Some('/')
        )
    })
}

/// The opening tag of the first `<tag ...>` whose markup up to the closing
/// `</tag>` contains `text`.
pub fn element_containing<'a>(html: &'a str, tag: &str, text: &str) -> Option<&'a str> {
    let text_at = html.find(text)?;
    let open = format!("<{}", tag);
    let start = html[..text_at].rfind(&open)?;
    let end = start + html[start..].find('>')? + 1;
    Some(&html[start..end])
}
