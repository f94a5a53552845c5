use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{
    modem::{Codec, CodecError},
    zs::{encode, Command, Fan, Frame, Mode, Revision},
};

/*
{
   "manufacturer":"Mitsubishi Heavy",
   "supportedModels":[
      "SRK-ZS"
   ],
   "supportedController":"Broadlink",
   "commandsEncoding":"Base64",
   "minTemperature":17.0,
   "maxTemperature":31.0,
   "precision":1,
   "operationModes":[
      "heat",
      "cool",
      "dry",
      "fan_only",
      "auto"
   ],
   "fanModes":[
      "auto",
      "low",
      ...
   ],
   */

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CodeFile {
    pub manufacturer: String,
    pub supported_models: Vec<String>,
    pub supported_controller: String,
    pub commands_encoding: String,
    pub min_temperature: f32,
    pub max_temperature: f32,
    pub precision: u8,
    pub operation_modes: Vec<String>,
    pub fan_modes: Vec<String>,
    pub commands: serde_json::Value,
}

fn operation_mode(mode: Mode) -> &'static str {
    match mode {
        Mode::Heat => "heat",
        Mode::Cool => "cool",
        Mode::Dry => "dry",
        Mode::Fan => "fan_only",
        Mode::Auto => "auto",
    }
}

/// Generates a SmartIR code file from all possible states, swings stopped.
pub fn gen_smartir(
    revision: Revision,
    codec: &dyn Codec<Error = CodecError>,
) -> anyhow::Result<CodeFile> {
    let fans = Fan::supported(revision);

    let commands: serde_json::Value = {
        // Commands are nested to represent all possible states, the hierarchy used in other models is:
        // mode -> fan -> temperature

        let mut all_commands = serde_json::Map::new();

        for mode in Mode::iter() {
            let mut mode_map = serde_json::Map::new();

            for &fan in fans {
                match mode {
                    Mode::Heat | Mode::Dry | Mode::Cool | Mode::Auto => {
                        let mut fan_map = serde_json::Map::new();

                        for temperature in Frame::MIN_TEMPERATURE..=Frame::MAX_TEMPERATURE {
                            let state = Command {
                                fan,
                                ..Command::on(mode, temperature)
                            };
                            fan_map.insert(
                                format!("{}", temperature),
                                codec.encode(&encode(&state, revision))?.into(),
                            );
                        }

                        mode_map.insert(fan.as_ref().into(), fan_map.into());
                    }
                    Mode::Fan => {
                        let state = Command {
                            fan,
                            ..Command::on(mode, Frame::DEFAULT_TEMPERATURE)
                        };

                        mode_map.insert(
                            fan.as_ref().into(),
                            codec.encode(&encode(&state, revision))?.into(),
                        );
                    }
                }
            }

            all_commands.insert(operation_mode(mode).into(), mode_map.into());
        }

        // Add "Off" state
        all_commands.insert("off".into(), codec.encode(&Frame::off())?.into());

        all_commands.into()
    };

    Ok(CodeFile {
        manufacturer: "Mitsubishi Heavy".into(),
        supported_models: vec!["SRK-ZS".into()],
        supported_controller: "Broadlink".into(),
        commands_encoding: codec.commands_encoding().into(),
        min_temperature: Frame::MIN_TEMPERATURE as f32,
        max_temperature: Frame::MAX_TEMPERATURE as f32,
        precision: 1,
        operation_modes: Mode::iter().map(|m| operation_mode(m).into()).collect(),
        fan_modes: fans.iter().map(|f| f.as_ref().into()).collect(),
        commands,
    })
}

#[cfg(test)]
mod test {
    use super::gen_smartir;
    use crate::modem::{create_codec, CodecType};
    use crate::zs::Revision;

    #[test]
    fn test_generate() {
        let codec = create_codec(CodecType::Hex);
        let file = gen_smartir(Revision::QuietStrong, codec.as_ref()).unwrap();

        assert_eq!(file.commands_encoding, "Hex");
        assert_eq!(file.fan_modes.len(), 7);
        assert_eq!(
            file.operation_modes,
            vec!["heat", "cool", "dry", "fan_only", "auto"]
        );
        assert_eq!(
            file.commands["cool"]["auto"]["22"],
            "52aec326d9115060000020c100000000000000"
        );
        assert_eq!(
            file.commands["heat"]["quiet"]["20"],
            "52aec326d91130210000206200000001000000"
        );
        assert_eq!(
            file.commands["off"],
            "52aec326d9115060000000c100000000000000"
        );
        assert!(file.commands["fan_only"]["medium"].is_string());
        assert_eq!(file.commands["dry"]["mediumHigh"].as_object().unwrap().len(), 15);

        let json = serde_json::to_string_pretty(&file).unwrap();
        assert!(json.contains("\"supportedController\": \"Broadlink\""));
    }

    #[test]
    fn test_generate_light() {
        let codec = create_codec(CodecType::BroadlinkBase64);
        let file = gen_smartir(Revision::Light, codec.as_ref()).unwrap();

        assert_eq!(file.commands_encoding, "Base64");
        assert!(!file.fan_modes.contains(&"strong".to_string()));
        assert!(file.commands["heat"]["strong"].is_null());
    }
}
