use anchor_lang::prelude::*;

#[error_code]
pub enum RecordError {
    #[msg("Nombre no puede estar vacio")]
    EmptyName,
    #[msg("Nombre excede la longitud maxima")]
    NameTooLong,
    #[msg("Timestamp del reloj invalido")]
    InvalidTimestamp,
    #[msg("Contador de cambios desbordado")]
    ChangeCountOverflow,
    #[msg("Indice de historial fuera de rango")]
    HistoryIndexOutOfBounds,
    #[msg("Pagina de historial demasiado grande")]
    HistoryPageTooLarge,
}
