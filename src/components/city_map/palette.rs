//! Risk-to-color mapping and the severity labels derived from risk.
//!
//! Two independent threshold schemes coexist. Node and pipe styling use the
//! four-band [`risk_color`] (35/60/80), while particle tints and the gauge
//! needle use the three-band [`severity_color`] (45/70). The pulse-ring cutoff
//! lives in `CityParams::critical_risk` and belongs to neither.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskColor {
	Teal,
	Amber,
	Orange,
	Red,
}

impl RiskColor {
	pub fn rgb(self) -> (u8, u8, u8) {
		match self {
			RiskColor::Teal => (0x00, 0xff, 0xcc),
			RiskColor::Amber => (0xff, 0xb8, 0x00),
			RiskColor::Orange => (0xff, 0x66, 0x00),
			RiskColor::Red => (0xff, 0x33, 0x55),
		}
	}

	pub fn hex(self) -> &'static str {
		match self {
			RiskColor::Teal => "#00ffcc",
			RiskColor::Amber => "#ffb800",
			RiskColor::Orange => "#ff6600",
			RiskColor::Red => "#ff3355",
		}
	}

	pub fn rgba(self, alpha: f64) -> String {
		let (r, g, b) = self.rgb();
		format!("rgba({}, {}, {}, {:.3})", r, g, b, alpha.clamp(0.0, 1.0))
	}
}

pub fn risk_color(risk: u32) -> RiskColor {
	match risk {
		0..35 => RiskColor::Teal,
		35..60 => RiskColor::Amber,
		60..80 => RiskColor::Orange,
		_ => RiskColor::Red,
	}
}

pub fn severity_color(value: f64) -> RiskColor {
	if value > 70.0 {
		RiskColor::Red
	} else if value > 45.0 {
		RiskColor::Amber
	} else {
		RiskColor::Teal
	}
}

/// CSS class tag for a risk numeral.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskTag {
	Safe,
	Warn,
	Danger,
}

impl RiskTag {
	pub fn from_risk(risk: u32) -> Self {
		if risk > 60 {
			RiskTag::Danger
		} else if risk > 35 {
			RiskTag::Warn
		} else {
			RiskTag::Safe
		}
	}

	pub fn class(self) -> &'static str {
		match self {
			RiskTag::Safe => "safe",
			RiskTag::Warn => "warn",
			RiskTag::Danger => "danger",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskStatus {
	Safe,
	Moderate,
	HighRisk,
}

impl RiskStatus {
	pub fn from_risk(risk: u32) -> Self {
		if risk > 70 {
			RiskStatus::HighRisk
		} else if risk > 45 {
			RiskStatus::Moderate
		} else {
			RiskStatus::Safe
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			RiskStatus::Safe => "SAFE",
			RiskStatus::Moderate => "MODERATE",
			RiskStatus::HighRisk => "HIGH RISK",
		}
	}

	pub fn class(self) -> &'static str {
		match self {
			RiskStatus::Safe => "safe",
			RiskStatus::Moderate => "warn",
			RiskStatus::HighRisk => "danger",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn risk_color_bands() {
		assert_eq!(risk_color(10), RiskColor::Teal);
		assert_eq!(risk_color(40), RiskColor::Amber);
		assert_eq!(risk_color(65), RiskColor::Orange);
		assert_eq!(risk_color(85), RiskColor::Red);
	}

	#[test]
	fn risk_color_boundaries_belong_to_upper_band() {
		assert_eq!(risk_color(34), RiskColor::Teal);
		assert_eq!(risk_color(35), RiskColor::Amber);
		assert_eq!(risk_color(59), RiskColor::Amber);
		assert_eq!(risk_color(60), RiskColor::Orange);
		assert_eq!(risk_color(79), RiskColor::Orange);
		assert_eq!(risk_color(80), RiskColor::Red);
	}

	#[test]
	fn severity_uses_strict_thresholds() {
		assert_eq!(severity_color(45.0), RiskColor::Teal);
		assert_eq!(severity_color(45.5), RiskColor::Amber);
		assert_eq!(severity_color(70.0), RiskColor::Amber);
		assert_eq!(severity_color(71.0), RiskColor::Red);
	}

	#[test]
	fn tags_and_status() {
		assert_eq!(RiskTag::from_risk(35), RiskTag::Safe);
		assert_eq!(RiskTag::from_risk(36), RiskTag::Warn);
		assert_eq!(RiskTag::from_risk(61).class(), "danger");
		assert_eq!(RiskStatus::from_risk(45).label(), "SAFE");
		assert_eq!(RiskStatus::from_risk(46).label(), "MODERATE");
		assert_eq!(RiskStatus::from_risk(71).label(), "HIGH RISK");
	}

	#[test]
	fn rgba_clamps_alpha() {
		assert_eq!(RiskColor::Teal.rgba(1.5), "rgba(0, 255, 204, 1.000)");
		assert_eq!(RiskColor::Red.rgba(-0.2), "rgba(255, 51, 85, 0.000)");
	}
}
