//! Sample-and-render cycle
//!
//! One cycle runs strictly in order:
//!
//! 1. Sample the switches and mirror both limits onto the LEDs
//! 2. Read the on-die and probe sensors, convert to Fahrenheit
//! 3. Drive both RGB indicators from the raw Celsius/limit comparison
//! 4. Clear the display, render both halves, place the decimal points
//!
//! The two sides are independent. A side whose sensor fails has its
//! indicator turned off and its display half left blank, while the other
//! side is rendered as usual.
//!
//! [`Thermometer::run`] repeats the cycle forever with a fixed delay.

use embedded_hal::delay::DelayNs;
use thermo_hal::{DigitalInput, DigitalOutput, PwmController, SegmentDisplay};

use crate::config::ThermometerConfig;
use crate::display::{clear_display, decompose, DecimalPoints, Readout};
use crate::indicator::{clear_indicator, set_indicator, IndicatorColor};
use crate::switches::{mirror_limits, Side, SwitchWord, TemperatureLimit};
use crate::traits::{SensorError, TemperatureSensor};
use crate::units::{celsius_to_fahrenheit, TemperatureUnit};

/// A successful reading and what it put on the peripherals
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// Raw reading in Celsius
    pub temp_c: f32,
    /// Raw reading in Fahrenheit
    pub temp_f: f32,
    /// Indicator color shown
    pub color: IndicatorColor,
    /// Cells rendered on this side's half
    pub readout: Readout,
}

impl Reading {
    /// Evaluate a Celsius reading for one side
    pub fn new(temp_c: f32, limit: TemperatureLimit, unit: TemperatureUnit, side: Side) -> Self {
        let temp_f = celsius_to_fahrenheit(temp_c);
        Self {
            temp_c,
            temp_f,
            color: IndicatorColor::for_reading(temp_c, limit),
            readout: decompose(temp_c, temp_f, unit, side),
        }
    }
}

/// What one side showed during a cycle
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SideReport {
    /// Limit decoded from the switches
    pub limit: TemperatureLimit,
    /// Unit selected by the format switch
    pub unit: TemperatureUnit,
    /// Rendered reading, or the sensor error that left this side dark
    pub reading: Result<Reading, SensorError>,
}

impl SideReport {
    /// Sensor error of this side, if its read failed
    pub fn fault(&self) -> Option<SensorError> {
        self.reading.err()
    }
}

/// Everything a cycle wrote to the peripherals
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Switch sample the cycle was based on
    pub switches: SwitchWord,
    /// Word written to the LED port
    pub leds: u32,
    /// Interior (on-die) channel
    pub interior: SideReport,
    /// Exterior (probe) channel
    pub exterior: SideReport,
    /// Decimal points latched into the display
    pub decimal_points: DecimalPoints,
}

impl CycleReport {
    /// Report of one side
    pub fn side(&self, side: Side) -> &SideReport {
        match side {
            Side::Interior => &self.interior,
            Side::Exterior => &self.exterior,
        }
    }

    /// Sides whose sensor failed this cycle
    pub fn faults(&self) -> impl Iterator<Item = (Side, SensorError)> + '_ {
        Side::ALL
            .into_iter()
            .filter_map(move |side| self.side(side).fault().map(|error| (side, error)))
    }

    /// Both sensors were read
    pub fn is_healthy(&self) -> bool {
        self.faults().next().is_none()
    }
}

/// Dual-probe thermometer
///
/// Owns one handle per peripheral. Pass `&mut` references to keep access
/// to the peripherals outside the thermometer.
pub struct Thermometer<SW, LED, PWM, SEG, INT, EXT> {
    switches: SW,
    leds: LED,
    pwm: PWM,
    display: SEG,
    interior: INT,
    exterior: EXT,
    config: ThermometerConfig,
}

impl<SW, LED, PWM, SEG, INT, EXT> Thermometer<SW, LED, PWM, SEG, INT, EXT>
where
    SW: DigitalInput,
    LED: DigitalOutput,
    PWM: PwmController,
    SEG: SegmentDisplay,
    INT: TemperatureSensor,
    EXT: TemperatureSensor,
{
    /// Create a thermometer with the factory configuration
    ///
    /// # Arguments
    /// - `switches`: Limit and format switch bank
    /// - `leds`: LED bank mirroring the limits
    /// - `pwm`: PWM controller driving both RGB indicators
    /// - `display`: Eight-digit seven-segment display
    /// - `interior`: On-die temperature sensor
    /// - `exterior`: External probe
    pub fn new(
        switches: SW,
        leds: LED,
        pwm: PWM,
        display: SEG,
        interior: INT,
        exterior: EXT,
    ) -> Self {
        Self {
            switches,
            leds,
            pwm,
            display,
            interior,
            exterior,
            config: ThermometerConfig::default(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: ThermometerConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration
    pub fn config(&self) -> &ThermometerConfig {
        &self.config
    }

    /// Run one sample-and-render cycle
    ///
    /// Sensor failures do not stop the cycle; they are reported per side in
    /// the returned [`CycleReport`].
    pub fn run_cycle(&mut self) -> CycleReport {
        // User input
        let switches = SwitchWord(self.switches.read_all());
        let int_limit = switches.limit(Side::Interior);
        let ext_limit = switches.limit(Side::Exterior);
        let leds = mirror_limits(&mut self.leds, ext_limit, int_limit);
        let int_unit = switches.unit(Side::Interior);
        let ext_unit = switches.unit(Side::Exterior);

        // Sensing
        let int = sample(&mut self.interior, Side::Interior)
            .map(|t| Reading::new(t, int_limit, int_unit, Side::Interior));
        let ext = sample(&mut self.exterior, Side::Exterior)
            .map(|t| Reading::new(t, ext_limit, ext_unit, Side::Exterior));

        #[cfg(feature = "defmt")]
        if let (Ok(int), Ok(ext)) = (&int, &ext) {
            defmt::debug!("interior {=f32} C, exterior {=f32} C", int.temp_c, ext.temp_c);
        }

        // Indicators
        let duty = self.config.duty();
        show_indicator(&mut self.pwm, &int, Side::Interior, duty);
        show_indicator(&mut self.pwm, &ext, Side::Exterior, duty);

        // Display, a failed side stays blank
        clear_display(&mut self.display);
        let mut decimal_points = DecimalPoints::default();
        for reading in [&int, &ext].into_iter().flatten() {
            reading.readout.render(&mut self.display);
            decimal_points = decimal_points.with(reading.readout.side, reading.readout.overflow);
        }
        decimal_points.apply(&mut self.display);

        CycleReport {
            switches,
            leds,
            interior: SideReport {
                limit: int_limit,
                unit: int_unit,
                reading: int,
            },
            exterior: SideReport {
                limit: ext_limit,
                unit: ext_unit,
                reading: ext,
            },
            decimal_points,
        }
    }

    /// Poll forever, sleeping the configured period after every cycle
    pub fn run<D: DelayNs>(&mut self, delay: &mut D) -> ! {
        #[cfg(feature = "defmt")]
        defmt::info!("Polling every {} ms", self.config.poll_period_ms);

        loop {
            // A failed side is logged by the cycle and shows dark until it reads again
            self.run_cycle();
            delay.delay_ms(self.config.poll_period_ms);
        }
    }

    /// Release the peripherals
    pub fn into_parts(self) -> (SW, LED, PWM, SEG, INT, EXT) {
        (
            self.switches,
            self.leds,
            self.pwm,
            self.display,
            self.interior,
            self.exterior,
        )
    }
}

#[cfg_attr(not(feature = "defmt"), allow(unused_variables))]
fn sample<S: TemperatureSensor>(sensor: &mut S, side: Side) -> Result<f32, SensorError> {
    let result = sensor.read_celsius();

    #[cfg(feature = "defmt")]
    if let Err(error) = result {
        defmt::warn!("{} sensor read failed, side left dark: {}", side, error);
    }

    result
}

fn show_indicator<P: PwmController>(
    pwm: &mut P,
    reading: &Result<Reading, SensorError>,
    side: Side,
    duty: f32,
) {
    match reading {
        Ok(reading) => set_indicator(pwm, reading.color, side, duty),
        Err(_) => clear_indicator(pwm, side),
    }
}
