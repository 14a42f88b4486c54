use std::path::Path;
use std::rc::Rc;

use anyhow::Context;
use duet_slider::*;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DemoConfig {
    slider: RangeConfig,
    options: SliderOptions,
    /// Initial value, in any shape the form boundary accepts.
    value: serde_json::Value,
}

fn load(path: Option<&Path>) -> anyhow::Result<DemoConfig> {
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

struct LogSink;

impl StyleSink for LogSink {
    fn set_style(&mut self, property: StyleProperty, percent: Option<f64>) {
        match percent {
            Some(p) => log::info!("fill {property}: {p:.1}%"),
            None => log::info!("fill {property} cleared"),
        }
    }
}

fn log_labels(slider: &RangeSlider) {
    if let (Some(min), Some(max)) = (
        slider.display_value(HandleRole::Min),
        slider.display_value(HandleRole::Max),
    ) {
        log::info!("thumbs [{min}] [{max}]");
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args_os().nth(1);
    let config = load(path.as_deref().map(Path::new))?;
    if let Err(e) = config.slider.validate() {
        log::warn!("{e}; fill geometry will be meaningless");
    }

    let slider = RangeSlider::with_options(config.slider, config.options);
    slider.register_on_change(Rc::new(|v| log::info!("form <- {v}")));
    slider.register_on_touched(Rc::new(|| log::info!("form touched")));
    slider.input().subscribe(|c| log::info!("input {}", c.value));
    slider.change().subscribe(|c| log::info!("change {}", c.value));
    slider.value_change().subscribe(|v| log::info!("valueChange {v}"));
    slider.set_display_with(|x| format!("{x:.0}"));

    slider.write_value(RawValue::from_json(&config.value));

    let handles = Rc::new(SliderHandles::new(slider.value().into()));
    slider.attach(handles.clone(), LogSink)?;
    log::info!("ticks at {:?}", slider.tick_positions());

    log::info!("-- drag min handle through max");
    for x in [45.0, 60.0, 70.0] {
        handles.min.drag_to(x);
        log_labels(&slider);
    }
    handles.min.release();

    log::info!("-- form writes a scalar");
    slider.write_value(RawValue::from_json(&json!(20)));

    log::info!("-- host lowers the high bound");
    slider.update_config(|c| c.high_bound(68.0));

    log::info!("-- host switches to vertical");
    slider.update_config(|c| c.vertical(true));

    log::info!("-- form clears the value");
    slider.write_value(RawValue::Absent);

    log::info!("final {} ({})", slider.value(), slider.fill_style().to_css());
    slider.dispose();
    Ok(())
}
