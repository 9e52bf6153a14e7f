use std::fmt;

use crate::channel::{Channel, ChannelHue};
use crate::color::{compose, Rgb};
use crate::config::ArchimedesConfig;
use crate::diagnostics::DiagnosticSink;
use crate::error::ConfigurationError;
use crate::spiral::{PolarCoordinate, Spiral};

/// Maps scalar readings to colors on the Archimedean wheel.
///
/// All derived coefficients are computed once in the constructor. After that
/// the mapper is read-only and can be shared across threads by reference.
pub struct Archimedes {
    config: ArchimedesConfig,
    spiral: Spiral,
    channels: [Channel; 3],
    sink: Option<Box<dyn DiagnosticSink>>,
}

impl Archimedes {
    pub fn new(config: ArchimedesConfig) -> Result<Self, ConfigurationError> {
        Self::build(config, None)
    }

    /// Like [`Archimedes::new`], reporting every step to `sink`.
    pub fn with_sink<S>(config: ArchimedesConfig, sink: S) -> Result<Self, ConfigurationError>
    where
        S: DiagnosticSink + 'static,
    {
        Self::build(config, Some(Box::new(sink)))
    }

    fn build(
        config: ArchimedesConfig,
        sink: Option<Box<dyn DiagnosticSink>>,
    ) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let spiral = Spiral::new(&config)?;
        let channels = ChannelHue::ALL.map(|hue| Channel::new(hue, config.brightness_max));
        let mapper = Self {
            config,
            spiral,
            channels,
            sink,
        };

        let (phi, r) = (spiral.phi_scale(), spiral.r_scale());
        log::trace!(
            "[archimedes] phi: k={} b={}; radius: k={} b={}",
            phi.k,
            phi.b,
            r.k,
            r.b
        );
        mapper.record(|| format!("scaling parameters for phi: k = {}, b = {}", phi.k, phi.b));
        mapper.record(|| format!("scaling parameters for radius: k = {}, b = {}", r.k, r.b));
        Ok(mapper)
    }

    // Formatting is skipped entirely when no sink is attached.
    fn record(&self, message: impl FnOnce() -> String) {
        if let Some(sink) = &self.sink {
            sink.record(&message());
        }
    }

    pub fn config(&self) -> &ArchimedesConfig {
        &self.config
    }

    pub fn spiral(&self) -> &Spiral {
        &self.spiral
    }

    pub fn channel(&self, hue: ChannelHue) -> &Channel {
        match hue {
            ChannelHue::Red => &self.channels[0],
            ChannelHue::Green => &self.channels[1],
            ChannelHue::Blue => &self.channels[2],
        }
    }

    pub fn position(&self, value: f64) -> PolarCoordinate {
        self.spiral.position(value)
    }

    /// Red, green and blue levels before the composer clamps them.
    pub fn levels(&self, value: f64) -> [i32; 3] {
        let at = self.position(value);
        self.record(|| {
            format!(
                "dot on the spiral for value {value} is at {} angle, {} radius",
                at.phi, at.r
            )
        });
        self.channels.map(|ch| {
            let outer = ch.outer_level(at.phi);
            let actual = ch.actual_level(outer, at.r);
            self.record(|| format!("{} channel: outer {outer}, actual {actual}", ch.hue.name()));
            actual
        })
    }

    pub fn get_rgb(&self, value: f64) -> Rgb {
        let [red, green, blue] = self.levels(value);
        let rgb = Rgb::from_levels(red, green, blue);
        self.record(|| format!("color for value {value} is {rgb}"));
        rgb
    }

    /// Packed `0xRRGGBB` color for `value`. Never fails: readings outside
    /// `[0, value_max]` are clamped.
    pub fn get_color(&self, value: f64) -> u32 {
        let [red, green, blue] = self.levels(value);
        let packed = compose(red, green, blue);
        self.record(|| format!("color for value {value} is {packed:#08x}"));
        packed
    }
}

impl fmt::Debug for Archimedes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Archimedes")
            .field("config", &self.config)
            .field("spiral", &self.spiral)
            .field("channels", &self.channels)
            .field("sink", &self.sink.is_some())
            .finish()
    }
}
