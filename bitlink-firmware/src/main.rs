//! bitlink - identifiable input firmware
//!
//! Firmware binary for the BBC micro:bit v2 (nRF52833). Reports button,
//! touch and shake events over USB serial and answers the host's `test`
//! handshake with `OK`, a check mark and its identity token.
//!
//! The identity is compiled in; see `build.rs` and `identities/`.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_nrf::buffered_uarte::{self, BufferedUarte};
use embassy_nrf::gpio::{Flex, Input, Level, Output, OutputDrive, Pull};
use embassy_nrf::{bind_interrupts, peripherals, twim, uarte};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use bitlink_display::LedMatrix;

mod channels;
mod feedback;
mod identity;
mod tasks;

bind_interrupts!(struct Irqs {
    UARTE0 => buffered_uarte::InterruptHandler<peripherals::UARTE0>;
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 128]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 128]> = StaticCell::new();

// TWIM transmits from RAM only
static I2C_TX_BUF: StaticCell<[u8; 16]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("bitlink firmware starting...");

    let p = embassy_nrf::init(Default::default());
    info!("Peripherals initialized");

    // Serial to the interface MCU's USB bridge: TX P0.06, RX P1.08
    let mut uart_config = uarte::Config::default();
    uart_config.parity = uarte::Parity::EXCLUDED;
    uart_config.baudrate = uarte::Baudrate::BAUD115200;

    let tx_buf = TX_BUF.init([0u8; 128]);
    let rx_buf = RX_BUF.init([0u8; 128]);

    let uart = BufferedUarte::new(
        p.UARTE0,
        p.TIMER0,
        p.PPI_CH0,
        p.PPI_CH1,
        p.PPI_GROUP0,
        p.P1_08,
        p.P0_06,
        Irqs,
        uart_config,
        rx_buf,
        tx_buf,
    );
    let (rx, tx) = uart.split();

    info!("UART initialized at 115200 baud");

    // Internal I2C bus to the accelerometer: SDA P0.16, SCL P0.08
    let i2c = twim::Twim::new(
        p.TWISPI0,
        Irqs,
        p.P0_16,
        p.P0_08,
        twim::Config::default(),
        I2C_TX_BUF.init([0u8; 16]),
    );

    // Buttons have external pull-ups
    let button_a = Input::new(p.P0_14, Pull::None);
    let button_b = Input::new(p.P0_23, Pull::None);

    // Ring pins P0, P1, P2 with the board's external pull-ups
    let ring = [
        Input::new(p.P0_02, Pull::None),
        Input::new(p.P0_03, Pull::None),
        Input::new(p.P0_04, Pull::None),
    ];
    let logo = Flex::new(p.P1_04);

    // LED matrix, top row and leftmost column first; rows high and
    // columns low light an LED, so everything starts off
    let matrix = LedMatrix::new(
        [
            Output::new(p.P0_21, Level::Low, OutputDrive::Standard),
            Output::new(p.P0_22, Level::Low, OutputDrive::Standard),
            Output::new(p.P0_15, Level::Low, OutputDrive::Standard),
            Output::new(p.P0_24, Level::Low, OutputDrive::Standard),
            Output::new(p.P0_19, Level::Low, OutputDrive::Standard),
        ],
        [
            Output::new(p.P0_28, Level::High, OutputDrive::Standard),
            Output::new(p.P0_11, Level::High, OutputDrive::Standard),
            Output::new(p.P0_31, Level::High, OutputDrive::Standard),
            Output::new(p.P1_05, Level::High, OutputDrive::Standard),
            Output::new(p.P0_30, Level::High, OutputDrive::Standard),
        ],
    );

    info!("Board I/O initialized");

    // Spawn tasks
    unwrap!(spawner.spawn(tasks::display_task(matrix)));
    unwrap!(spawner.spawn(tasks::controller_task(tx)));
    unwrap!(spawner.spawn(tasks::serial_rx_task(rx)));
    unwrap!(spawner.spawn(tasks::buttons_task(button_a, button_b)));
    unwrap!(spawner.spawn(tasks::touch_task(ring, logo)));
    unwrap!(spawner.spawn(tasks::shake_task(i2c)));

    info!("All tasks spawned, firmware running");
}
