/// размер окна записи кодпоинтов
pub(crate) const STAGING_LEN: usize = 16;

/// приёмник кодпоинтов с окном записи фиксированного размера.
///
/// производитель пишет кодпоинты через write(); при заполнении окна
/// вызывается recycle() - потребитель разбирает накопленное и освобождает
/// окно. потребитель может сбросить good(), когда дальнейший ввод уже
/// не повлияет на результат - производителю следует остановиться
pub trait CodepointSink
{
    /// свободное место в окне записи
    fn space(&self) -> usize;

    /// можно ли продолжать запись
    fn good(&self) -> bool;

    /// дописать кодпоинт в окно. предусловие: space() > 0
    fn push(&mut self, code: u32);

    /// разобрать накопленные кодпоинты и освободить окно записи.
    /// для пустого окна - только сброс
    fn recycle(&mut self);

    /// записать кодпоинт, при необходимости освободив окно.
    /// false - потребитель просит остановить производство
    #[inline(always)]
    fn write(&mut self, code: u32) -> bool
    {
        if self.space() == 0 {
            self.recycle();

            if !self.good() {
                return false;
            }
        }

        self.push(code);

        true
    }
}
