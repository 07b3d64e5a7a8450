//! Interactive menu loop

use std::fs::File;
use std::io::{BufRead, BufReader, Write};

use crate::config::Config;
use crate::error::{CarstockError, Result};
use crate::input::{self, LineReader};
use crate::inventory::Inventory;
use crate::maintenance;
use crate::output;
use crate::query;
use crate::record::{Brand, Vehicle};

/// Menu entries, selected by the first letter typed (any case)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ListAll,
    ListByBrand,
    ListByPriceRange,
    Insert,
    RemoveOverrun,
    Exit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        match line.chars().next()?.to_ascii_lowercase() {
            'a' => Some(Command::ListAll),
            'b' => Some(Command::ListByBrand),
            'c' => Some(Command::ListByPriceRange),
            'd' => Some(Command::Insert),
            'e' => Some(Command::RemoveOverrun),
            'f' => Some(Command::Exit),
            _ => None,
        }
    }

    fn header(self) -> &'static str {
        match self {
            Command::ListAll => output::OPTION_A,
            Command::ListByBrand => output::OPTION_B,
            Command::ListByPriceRange => output::OPTION_C,
            Command::Insert => output::OPTION_D,
            Command::RemoveOverrun => output::OPTION_E,
            Command::Exit => output::OPTION_F,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
    /// Input closed while waiting for an answer
    EndOfInput,
}

/// Load the data file into an inventory with room for `extra_capacity` inserts
pub fn open_inventory(config: &Config) -> Result<Inventory> {
    let file = File::open(&config.data_file).map_err(|source| CarstockError::SourceUnavailable {
        path: config.data_file.clone(),
        source,
    })?;
    log::info!("reading {}", config.data_file.display());

    let vehicles = input::read_all_vehicles(BufReader::new(file))?;
    let mut inventory = Inventory::for_load(vehicles.len(), config.extra_capacity);
    inventory.bulk_load(vehicles)?;

    log::info!(
        "loaded {} vehicles, capacity {}",
        inventory.len(),
        inventory.capacity()
    );
    Ok(inventory)
}

/// One user session over an inventory
pub struct Session<R, W> {
    input: LineReader<R>,
    out: W,
    inventory: Inventory,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, inventory: Inventory) -> Self {
        Self {
            input: LineReader::new(input),
            out,
            inventory,
            clear_screen: true,
        }
    }

    /// Enable or disable the screen clearing between commands
    pub fn clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    pub fn into_inventory(self) -> Inventory {
        self.inventory
    }

    /// Run commands until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        self.clear()?;
        self.out.write_all(output::TITLE.as_bytes())?;

        loop {
            output::write_menu(&mut self.out)?;
            let Some(line) = self.prompt(output::PROMPT_OPTION)? else {
                self.end_of_input()?;
                break;
            };
            self.clear()?;

            let flow = match Command::parse(&line) {
                Some(command) => {
                    log::debug!("command {:?}", command);
                    let result = self.execute(command);
                    self.recover(result)?
                }
                None => {
                    log::debug!("invalid option {:?}", line);
                    self.out.write_all(output::INVALID_OPTION.as_bytes())?;
                    Flow::Continue
                }
            };
            match flow {
                Flow::Continue => self.out.flush()?,
                Flow::Exit => break,
                Flow::EndOfInput => {
                    self.end_of_input()?;
                    break;
                }
            }
        }

        self.out.flush()?;
        Ok(())
    }

    /// Report the recoverable failures of a command and keep the loop going
    fn recover(&mut self, result: Result<Flow>) -> Result<Flow> {
        let message = match result {
            Ok(flow) => return Ok(flow),
            Err(CarstockError::InvalidNumber(text)) => {
                log::info!("rejected number {:?}", text);
                output::INVALID_NUMBER
            }
            Err(CarstockError::InvalidRange { min, max }) => {
                log::info!("rejected price range {min} > {max}");
                output::INVALID_RANGE
            }
            Err(CarstockError::CapacityExceeded { capacity }) => {
                log::warn!("inventory full at {capacity} vehicles");
                output::INVENTORY_FULL
            }
            Err(e) => return Err(e),
        };
        self.out.write_all(message.as_bytes())?;
        Ok(Flow::Continue)
    }

    fn execute(&mut self, command: Command) -> Result<Flow> {
        if command == Command::Exit {
            self.out.write_all(output::GOODBYE.as_bytes())?;
            return Ok(Flow::Exit);
        }

        writeln!(self.out, "{}", command.header())?;

        match command {
            Command::ListAll => self.list_all(),
            Command::ListByBrand => self.list_by_brand(),
            Command::ListByPriceRange => self.list_by_price_range(),
            Command::Insert => self.insert(),
            Command::RemoveOverrun => self.remove_overrun(),
            Command::Exit => Ok(Flow::Exit),
        }
    }

    fn list_all(&mut self) -> Result<Flow> {
        let listings = query::list_all(&self.inventory);
        output::write_listings(&mut self.out, &listings)?;
        Ok(Flow::Continue)
    }

    fn list_by_brand(&mut self) -> Result<Flow> {
        let Some(line) = self.prompt(output::PROMPT_BRAND)? else {
            return Ok(Flow::EndOfInput);
        };
        let brand = Brand::new(&line);

        let listings = query::filter_by_brand(&self.inventory, brand.as_str());
        if listings.is_empty() {
            output::write_brand_not_found(&mut self.out, brand.as_str())?;
        } else {
            output::write_listings(&mut self.out, &listings)?;
        }
        Ok(Flow::Continue)
    }

    fn list_by_price_range(&mut self) -> Result<Flow> {
        let Some(min) = self.prompt_price(output::PROMPT_MIN_PRICE)? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(max) = self.prompt_price(output::PROMPT_MAX_PRICE)? else {
            return Ok(Flow::EndOfInput);
        };
        query::check_price_range(min, max)?;

        let listings = query::filter_by_price_range(&self.inventory, min, max);
        if listings.is_empty() {
            output::write_price_range_not_found(&mut self.out, min, max)?;
        } else {
            output::write_listings(&mut self.out, &listings)?;
        }
        Ok(Flow::Continue)
    }

    fn insert(&mut self) -> Result<Flow> {
        if self.inventory.is_full() {
            return Err(CarstockError::CapacityExceeded {
                capacity: self.inventory.capacity(),
            });
        }

        let Some(brand) = self.prompt(output::PROMPT_NEW_BRAND)? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(model) = self.prompt(output::PROMPT_NEW_MODEL)? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(year) = self.prompt_int(output::PROMPT_NEW_YEAR)? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(mileage) = self.prompt_int(output::PROMPT_NEW_MILEAGE)? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(price) = self.prompt_price(output::PROMPT_NEW_PRICE)? else {
            return Ok(Flow::EndOfInput);
        };

        let vehicle = Vehicle::new(&brand, &model, year, mileage, price);
        let number = maintenance::insert_new(&mut self.inventory, vehicle)?;
        output::write_inserted(&mut self.out, number)?;
        Ok(Flow::Continue)
    }

    fn remove_overrun(&mut self) -> Result<Flow> {
        let Some(max_mileage) = self.prompt_int(output::PROMPT_MAX_MILEAGE)? else {
            return Ok(Flow::EndOfInput);
        };

        let out = &mut self.out;
        let mut write_error = None;
        let removed = maintenance::remove_overrun(&mut self.inventory, max_mileage, |vehicle| {
            if write_error.is_none() {
                write_error = output::write_removal(&mut *out, vehicle).err();
            }
        });
        if let Some(e) = write_error {
            return Err(e.into());
        }

        if removed == 0 {
            output::write_overrun_not_found(&mut self.out, max_mileage)?;
        }
        Ok(Flow::Continue)
    }

    /// Show `text` and read the answer; None once input is exhausted
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(self.input.read_line()?)
    }

    fn prompt_int(&mut self, text: &str) -> Result<Option<i32>> {
        match self.prompt(text)? {
            None => Ok(None),
            Some(line) => input::parse_leading_int(&line)
                .map(Some)
                .ok_or(CarstockError::InvalidNumber(line)),
        }
    }

    fn prompt_price(&mut self, text: &str) -> Result<Option<f64>> {
        match self.prompt(text)? {
            None => Ok(None),
            Some(line) => input::parse_leading_price(&line)
                .map(Some)
                .ok_or(CarstockError::InvalidNumber(line)),
        }
    }

    /// Closed input ends the session the same way option F does
    fn end_of_input(&mut self) -> Result<()> {
        log::debug!("input closed");
        self.out.write_all(output::GOODBYE.as_bytes())?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            self.out.write_all(output::CLEAR_SCREEN.as_bytes())?;
        }
        Ok(())
    }
}
