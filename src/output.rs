//! Text the program shows to the user
//!
//! Messages are the Portuguese ones of the classic menu, reproduced byte for byte so
//! recorded sessions compare equal.

use std::io::{self, Write};

use crate::query::Listing;
use crate::record::Vehicle;

pub const TITLE: &str = "------------------ CARROS ------------------\n";
pub const PROMPT_OPTION: &str = "Digite a opção desejada: ";
pub const INVALID_OPTION: &str = "Opção inválida, tente novamente.\n";
pub const INVALID_NUMBER: &str = "Valor inválido, tente novamente.\n\n";
pub const GOODBYE: &str = "Até mais!\n";

pub const MENU_HEADER: &str = "SELECIONE UMA OPÇÃO: \n\n";
pub const OPTION_A: &str = "A - Exibir a relação completa de registros.\n";
pub const OPTION_B: &str = "B - Exibir todos os registros de carros de uma marca específica, fornecida pelo usuário via teclado.\n";
pub const OPTION_C: &str = "C - Exibir todos os registros de carros cujo preço esteja entre um valor mínimo e um valor máximo, fornecidos pelo usuário via teclado.\n";
pub const OPTION_D: &str = "D - Inserir um novo registro de carro no vetor; todos os dados do carro devem ser fornecidos pelo usuário via teclado.\n";
pub const OPTION_E: &str = "E - Remover todos os registros de carros do vetor cuja kilometragem seja superior a um valor fornecido pelo usuário via teclado.\n";
pub const OPTION_F: &str = "F - Sair do programa.\n";

pub const PROMPT_BRAND: &str = "Digite a marca desejada: ";
pub const PROMPT_MIN_PRICE: &str = "Digite o valor mínimo de preço: ";
pub const PROMPT_MAX_PRICE: &str = "Digite o valor máximo de preço: ";
pub const INVALID_RANGE: &str = "O valor mínimo não pode ser maior que o máximo.\n";
pub const PROMPT_MAX_MILEAGE: &str =
    "Digite a quilometragem de corte para remover carros com quilometragem superior: ";

pub const PROMPT_NEW_BRAND: &str = "Digite a marca: ";
pub const PROMPT_NEW_MODEL: &str = "Digite o modelo: ";
pub const PROMPT_NEW_YEAR: &str = "Digite o ano de fabricação: ";
pub const PROMPT_NEW_MILEAGE: &str = "Digite a quilometragem: ";
pub const PROMPT_NEW_PRICE: &str = "Digite o preço: ";
pub const INVENTORY_FULL: &str = "Não há espaço para inserir um novo carro.\n\n";

/// ANSI sequence clearing the screen and homing the cursor
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Write the option menu
pub fn write_menu<W: Write>(writer: &mut W) -> io::Result<()> {
    writer.write_all(MENU_HEADER.as_bytes())?;
    for option in [OPTION_A, OPTION_B, OPTION_C, OPTION_D, OPTION_E] {
        writer.write_all(option.as_bytes())?;
    }
    writer.write_all(OPTION_F.as_bytes())?;
    writeln!(writer)
}

/// Write one vehicle block
pub fn write_vehicle<W: Write>(writer: &mut W, vehicle: &Vehicle) -> io::Result<()> {
    writeln!(writer, "------------------------")?;
    writeln!(writer, "MARCA: {}", vehicle.brand)?;
    writeln!(writer, "MODELO: {}", vehicle.model)?;
    writeln!(writer, "ANO DE FABRICAÇÃO: {}", vehicle.year)?;
    writeln!(writer, "QUILOMETRAGEM: {} Km", vehicle.mileage)?;
    writeln!(writer, "PREÇO: R$ {:.2}\n", vehicle.price)
}

/// Write each listing as a numbered vehicle block
pub fn write_listings<W: Write>(writer: &mut W, listings: &[Listing<'_>]) -> io::Result<()> {
    for listing in listings {
        writeln!(writer, "CARRO {}", listing.number)?;
        write_vehicle(writer, listing.vehicle)?;
    }
    Ok(())
}

/// Announce a vehicle that is about to be removed
pub fn write_removal<W: Write>(writer: &mut W, vehicle: &Vehicle) -> io::Result<()> {
    write!(writer, "REMOVENDO CARRO: ")?;
    write_vehicle(writer, vehicle)
}

pub fn write_brand_not_found<W: Write>(writer: &mut W, brand: &str) -> io::Result<()> {
    writeln!(writer, "Nenhum carro com a marca \"{}\" encontrado.\n", brand)
}

pub fn write_price_range_not_found<W: Write>(writer: &mut W, min: f64, max: f64) -> io::Result<()> {
    writeln!(
        writer,
        "Nenhum carro de preço entre {:.2} e {:.2} foi encontrado.\n",
        min, max
    )
}

pub fn write_overrun_not_found<W: Write>(writer: &mut W, max_mileage: i32) -> io::Result<()> {
    writeln!(writer, "Nenhum carro com mais de {} km foi encontrado.\n", max_mileage)
}

pub fn write_inserted<W: Write>(writer: &mut W, number: usize) -> io::Result<()> {
    writeln!(writer, "Carro inserido com sucesso na posição {}.\n", number)
}
