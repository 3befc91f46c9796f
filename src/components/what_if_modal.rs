use leptos::prelude::*;

use super::city_map::Scenario;

/// Scenario picker. `on_apply` receives the scenario key; the modal closes
/// itself on apply or dismiss.
#[component]
pub fn WhatIfModal<F>(open: RwSignal<bool>, on_apply: F) -> impl IntoView
where
	F: Fn(&'static str) + Clone + 'static,
{
	view! {
		<div class="whatif-modal" class:open=move || open.get()>
			<div class="whatif-card">
				<h2 class="panel-title">"WHAT-IF SIMULATION"</h2>
				<p class="whatif-hint">"Apply a canned intervention to the whole network."</p>
				<div class="whatif-options">
					{Scenario::ALL
						.into_iter()
						.map(|scenario| {
							let on_apply = on_apply.clone();
							view! {
								<button
									class="whatif-option"
									on:click=move |_| {
										open.set(false);
										on_apply(scenario.key());
									}
								>
									<span class="whatif-title">{scenario.title()}</span>
									<span class="whatif-gain">
										{format!("−{:.0} risk", scenario.reduction())}
									</span>
								</button>
							}
						})
						.collect_view()}
				</div>
				<button class="whatif-close" on:click=move |_| open.set(false)>
					"DISMISS"
				</button>
			</div>
		</div>
	}
}
