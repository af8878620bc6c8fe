//! Stat Card Component
//!
//! Displays a single headline number with a label.

use leptos::*;

#[component]
pub fn StatCard(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional, into)]
    hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition-colors">
            <span class="text-gray-400 text-sm">{label}</span>
            <div class="text-3xl font-bold mt-2">{move || value.get()}</div>
            {hint.map(|h| view! { <p class="text-gray-500 text-xs mt-2">{h}</p> })}
        </div>
    }
}

/// Format a USD amount compactly ("$1.5M", "$250K")
pub fn format_usd(amount: f64) -> String {
    if amount >= 1_000_000_000.0 {
        format!("${:.1}B", amount / 1_000_000_000.0)
    } else if amount >= 1_000_000.0 {
        format!("${:.1}M", amount / 1_000_000.0)
    } else if amount >= 1_000.0 {
        format!("${:.0}K", amount / 1_000.0)
    } else {
        format!("${:.0}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(2_500_000_000.0), "$2.5B");
        assert_eq!(format_usd(1_500_000.0), "$1.5M");
        assert_eq!(format_usd(250_000.0), "$250K");
        assert_eq!(format_usd(42.0), "$42");
    }
}
