//! Joystick-driven azimuth example.
//!
//! Builds an azimuth axis from TOML, homes it against a simulated proximity
//! switch, then follows a sequence of stick positions on a simulated
//! mechanism, printing the command issued every cycle.

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use azimuth_control::motor::adapters::DigitalProximity;
use azimuth_control::motor::{EncoderPort, MotorPort};
use azimuth_control::{parse_config, AzimuthMotor, HomingState};

const CONFIG: &str = r#"
[axes.turret]
name = "Turret"
ticks_per_rotation = 4096
stick_error = 0.1
large_error_threshold = 200
small_error_threshold = 20
fast_speed = 0.8
slow_speed = 0.25
peak_output_forward = 1.0
peak_output_reverse = -1.0
homing_timeout_cycles = 200
"#;

/// Encoder ticks travelled per cycle at full output.
const TICKS_PER_CYCLE: f32 = 120.0;

/// Physical position of the home switch, in ticks from power-on.
const SWITCH_AT: i64 = -700;

/// Simulated turret: a motor that moves an encoder.
#[derive(Default)]
struct Turret {
    output: f32,
    /// Physical position since power-on.
    travelled: i64,
    /// Physical position the encoder was last reset at.
    zero_at: i64,
}

impl Turret {
    fn advance(&mut self) {
        self.travelled += (self.output * TICKS_PER_CYCLE) as i64;
    }
}

struct TurretMotor(Rc<RefCell<Turret>>);
struct TurretEncoder(Rc<RefCell<Turret>>);

/// Inductive switch pulling its line low within 60 ticks of the target.
struct SwitchPin(Rc<RefCell<Turret>>);

impl MotorPort for TurretMotor {
    type Error = Infallible;

    fn set_output(&mut self, percent: f32) -> Result<(), Self::Error> {
        self.0.borrow_mut().output = percent;
        Ok(())
    }

    fn configure_peak_output(&mut self, forward: f32, reverse: f32) -> Result<(), Self::Error> {
        println!("Peak output configured: +{forward} / {reverse}");
        Ok(())
    }
}

impl EncoderPort for TurretEncoder {
    type Error = Infallible;

    fn read_raw_count(&mut self) -> Result<i64, Self::Error> {
        let turret = self.0.borrow();
        Ok(turret.travelled - turret.zero_at)
    }

    fn reset(&mut self) -> Result<(), Self::Error> {
        let mut turret = self.0.borrow_mut();
        turret.zero_at = turret.travelled;
        Ok(())
    }
}

impl embedded_hal::digital::ErrorType for SwitchPin {
    type Error = Infallible;
}

impl embedded_hal::digital::InputPin for SwitchPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        let near = (self.0.borrow().travelled - SWITCH_AT).abs() <= 60;
        Ok(!near)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

fn main() {
    println!("=== Joystick Azimuth Example ===\n");

    let config = parse_config(CONFIG).expect("Failed to parse configuration");
    let turret = Rc::new(RefCell::new(Turret {
        // Powered on somewhere past the switch, encoder reading negative
        travelled: -40,
        ..Turret::default()
    }));

    let mut azimuth = AzimuthMotor::builder()
        .from_config(&config, "turret")
        .expect("Axis not found")
        .motor(TurretMotor(turret.clone()))
        .encoder(TurretEncoder(turret.clone()))
        .proximity(DigitalProximity::active_low(SwitchPin(turret.clone())))
        .build()
        .expect("Failed to build axis");

    println!("Axis: {}\n", azimuth.name());

    // Homing
    azimuth.begin_homing().expect("Failed to start homing");
    loop {
        match azimuth.homing_step() {
            Ok(HomingState::Zeroed) => break,
            Ok(state) => println!("  homing: {state:?}"),
            Err(e) => {
                println!("  homing failed: {e}");
                return;
            }
        }
        turret.borrow_mut().advance();
    }
    println!("Homed. Position: {:?}\n", azimuth.current_position());

    // Follow stick inputs, a fixed number of cycles each
    let sticks = [(1.0, 0.0), (0.7, -0.7), (-1.0, 0.05), (-0.5, 0.5), (0.0, 0.0)];
    for (x, y) in sticks {
        println!("Stick ({x:>5.2}, {y:>5.2})");
        for cycle in 0..40 {
            let command = match azimuth.point_to_target(x, y) {
                Ok(command) => command,
                Err(e) => {
                    println!("  cycle {cycle}: fault {e}");
                    break;
                }
            };
            if command.is_stop() {
                println!(
                    "  settled after {cycle} cycles at {:.1} degrees",
                    azimuth.current_degrees().map(|d| d.value()).unwrap_or(f32::NAN)
                );
                break;
            }
            turret.borrow_mut().advance();
        }
    }

    println!("\n=== Example Complete ===");
}
