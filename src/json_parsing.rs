use{
    serde::{Serialize, de::DeserializeOwned},
    serde_json::Value,
    std::{
        fs::File,
        io::{BufReader, Write},
        process::exit
    },
};

/// Read the parameter struct from a json file. Without a file the default
/// parameters are printed so they can be piped into one, then we exit.
pub fn parse<T>(file: Option<&String>) -> (T, Value)
where T: Default + Serialize + DeserializeOwned
{
    match file{
        None => {
            let opt = T::default();
            serde_json::to_writer_pretty(
                std::io::stdout(),
                &opt
            ).expect("unable to write default json");
            println!();
            exit(0)
        },
        Some(file) => {
            let f = File::open(file)
                .expect("unable to open json file");
            let buf = BufReader::new(f);
            let json: Value = serde_json::from_reader(buf)
                .expect("invalid json");
            let opt = serde_json::from_value(json.clone())
                .expect("unable to parse parameters from json");
            (opt, json)
        }
    }
}

pub fn write_json<W: Write>(mut writer: W, json: &Value)
{
    write!(writer, "#").unwrap();
    serde_json::to_writer(&mut writer, json)
        .expect("unable to write json header");
    writeln!(writer).unwrap();
}
