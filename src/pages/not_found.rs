use leptos::prelude::*;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found">
			<h1>"SIGNAL LOST"</h1>
			<p>"No network segment at this address."</p>
			<a href="/">"Back to the city map"</a>
		</div>
	}
}
