use clap::{Parser, Subcommand};
use hexplay::HexViewBuilder;
use tracing_subscriber::EnvFilter;

use mhi_heatpump::{
    modem::{create_codec, create_device, CodecType, DeviceType},
    remote::Remote,
    smartir,
    zs::{self, Codes, Command, Fan, Field, HSwing, Operation, Revision, VSwing},
};

/// Encode Mitsubishi Heavy SRK-ZS infrared commands
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Protocol revision of the indoor unit (quiet-strong, light)
    #[arg(long, default_value = "quiet-strong")]
    revision: Revision,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Encode a command and send it through a transmitter
    Send {
        /// Transmitter, as `lines:<codec>` with codec one of hex, broadlink-hex, broadlink-base64, raw
        #[arg(long, default_value = "lines:hex")]
        device: DeviceType,

        #[command(flatten)]
        state: StateArgs,
    },

    /// Print the resolved codes and a hex dump of a command's frame
    Dump {
        #[command(flatten)]
        state: StateArgs,
    },

    /// Print a SmartIR code file covering every mode, fan speed and temperature
    Smartir {
        #[arg(long, default_value = "broadlink-base64")]
        encoding: CodecType,
    },
}

#[derive(clap::Args, Debug)]
struct StateArgs {
    /// heat, cool, dry, fan, auto or off
    #[arg(long, default_value = "cool")]
    operation: Operation,

    /// Target temperature in Celsius, clamped to 17-31
    #[arg(long, default_value_t = 22, allow_negative_numbers = true)]
    temperature: i32,

    #[arg(long, default_value = "auto")]
    fan: String,

    /// Vertical vane position, e.g. stopped, fixedMiddle, rangeFull
    #[arg(long, default_value = "stopped")]
    vswing: String,

    /// Horizontal vane position, e.g. stopped, fixedCenter, rangeFull
    #[arg(long, default_value = "stopped")]
    hswing: String,

    /// Turn the display light on (light revision only)
    #[arg(long)]
    light: bool,
}

impl StateArgs {
    fn command(&self) -> Command {
        Command {
            fan: Fan::from_legacy(&self.fan),
            vswing: VSwing::from_legacy(&self.vswing),
            hswing: HSwing::from_legacy(&self.hswing),
            light: self.light,
            ..Command::new(self.operation, self.temperature)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("mhi_heatpump=info"));

    // Payloads go to stdout, keep logs out of the way
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();

    match args.command {
        Cmd::Send { device, state } => {
            let mut remote = Remote::new(create_device(device), args.revision);
            remote.send(&state.command())?;
        }
        Cmd::Dump { state } => {
            let command = state.command();
            let frame = zs::encode(&command, args.revision);

            println!("{:?}", command);
            if command.operation() != Operation::Off {
                println!("{:?}", Codes::resolve(&command, args.revision));
            }
            println!("{}", frame);
            println!("{}", HexViewBuilder::new(&frame.as_bytes()[..]).row_width(16).finish());
        }
        Cmd::Smartir { encoding } => {
            let codec = create_codec(encoding);
            let code_file = smartir::gen_smartir(args.revision, codec.as_ref())?;
            println!("{}", serde_json::to_string_pretty(&code_file)?);
        }
    }

    Ok(())
}
