//! View-mode buttons and the timeline slider. Both only change what the
//! header text says; the simulation ignores them.

use std::fmt;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
	#[default]
	Risk,
	Flow,
	Quality,
}

impl ViewMode {
	pub const ALL: [ViewMode; 3] = [ViewMode::Risk, ViewMode::Flow, ViewMode::Quality];

	pub fn label(self) -> &'static str {
		match self {
			ViewMode::Risk => "RISK",
			ViewMode::Flow => "FLOW",
			ViewMode::Quality => "QUALITY",
		}
	}
}

/// Slider offset in minutes relative to now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderTime {
	Live,
	Past(u32),
	Forecast(u32),
}

impl SliderTime {
	pub fn from_minutes(minutes: i32) -> Self {
		match minutes {
			0 => SliderTime::Live,
			m if m < 0 => SliderTime::Past(m.unsigned_abs()),
			m => SliderTime::Forecast(m.unsigned_abs()),
		}
	}
}

impl fmt::Display for SliderTime {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SliderTime::Live => write!(f, "NOW → LIVE"),
			SliderTime::Past(m) => write!(f, "{} MIN AGO", m),
			SliderTime::Forecast(m) => write!(f, "+{} MIN (FORECAST)", m),
		}
	}
}

#[component]
pub fn ModeToggle(mode: RwSignal<ViewMode>) -> impl IntoView {
	view! {
		<div class="mode-toggle">
			{ViewMode::ALL
				.into_iter()
				.map(|m| {
					view! {
						<button
							class="mode-btn"
							class:active=move || mode.get() == m
							on:click=move |_| mode.set(m)
						>
							{m.label()}
						</button>
					}
				})
				.collect_view()}
		</div>
	}
}

#[component]
pub fn TimeSlider(minutes: RwSignal<i32>) -> impl IntoView {
	let label = move || SliderTime::from_minutes(minutes.get());

	view! {
		<div class="time-slider">
			<input
				type="range"
				min="-60"
				max="60"
				step="5"
				prop:value=move || minutes.get().to_string()
				on:input=move |ev| {
					if let Ok(v) = event_target_value(&ev).parse::<i32>() {
						minutes.set(v);
					}
				}
			/>
			<span class="slider-time" class:live=move || label() == SliderTime::Live>
				{move || label().to_string()}
			</span>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn slider_labels() {
		assert_eq!(SliderTime::from_minutes(0).to_string(), "NOW → LIVE");
		assert_eq!(SliderTime::from_minutes(-15).to_string(), "15 MIN AGO");
		assert_eq!(SliderTime::from_minutes(30).to_string(), "+30 MIN (FORECAST)");
	}

	#[test]
	fn extreme_offsets_do_not_overflow() {
		assert_eq!(SliderTime::from_minutes(i32::MIN), SliderTime::Past(2_147_483_648));
	}
}
