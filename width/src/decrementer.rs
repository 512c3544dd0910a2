use crate::cluster;
use crate::cluster::State;
use crate::sink::CodepointSink;
use crate::sink::STAGING_LEN;
use crate::Width;

/// движок ширины: потребитель кодпоинтов, списывающий ширину кластеров
/// с остатка лимита
pub(crate) struct WidthDecrementer
{
    /// остаток лимита ширины
    width: Width,
    /// состояние кластерного автомата, переносится между разборами окна
    state: State,
    /// окно записи
    buf: [u32; STAGING_LEN],
    /// сколько кодпоинтов записано в окно
    len: usize,
    /// лимит ещё не исчерпан
    good: bool,
}

impl WidthDecrementer
{
    pub fn new(limit: Width) -> Self
    {
        Self {
            width: limit,
            state: cluster::INITIAL,
            buf: [0; STAGING_LEN],
            len: 0,
            good: limit != 0,
        }
    }

    /// остаток лимита после разбора того, что ещё не разобрано в окне
    pub fn remaining_width(&self) -> Width
    {
        if self.width != 0 && self.len != 0 {
            let run = cluster::width_run(&self.buf[.. self.len], self.width, self.state, false);

            return run.width;
        }

        self.width
    }
}

impl CodepointSink for WidthDecrementer
{
    #[inline(always)]
    fn space(&self) -> usize
    {
        STAGING_LEN - self.len
    }

    #[inline(always)]
    fn good(&self) -> bool
    {
        self.good
    }

    #[inline(always)]
    fn push(&mut self, code: u32)
    {
        self.buf[self.len] = code;
        self.len += 1;
    }

    fn recycle(&mut self)
    {
        if self.good {
            let run = cluster::width_run(&self.buf[.. self.len], self.width, self.state, false);

            self.width = run.width;
            self.state = run.state;

            if self.width == 0 {
                self.good = false;
            }
        }

        self.len = 0;
    }
}

/// результат завершающего разбора движка с позицией
pub(crate) struct RemainingWidth
{
    /// остаток лимита
    pub width: Width,
    /// автомат разобрал все кодпоинты, дойдя до конца строки
    pub whole_string_covered: bool,
    /// количество кодпоинтов, полностью поместившихся в лимит
    pub codepoints_count: usize,
}

/// движок ширины, дополнительно считающий поместившиеся кодпоинты
pub(crate) struct WidthDecrementerWithPos
{
    width: Width,
    state: State,
    /// количество кодпоинтов, разобранных до исчерпания лимита
    codepoints_count: usize,
    buf: [u32; STAGING_LEN],
    len: usize,
    good: bool,
}

impl WidthDecrementerWithPos
{
    pub fn new(limit: Width) -> Self
    {
        Self {
            width: limit,
            state: cluster::INITIAL,
            codepoints_count: 0,
            buf: [0; STAGING_LEN],
            len: 0,
            good: limit != 0,
        }
    }

    /// остаток лимита, признак полного покрытия строки и количество
    /// поместившихся кодпоинтов
    pub fn remaining_width_and_codepoints_count(&mut self) -> RemainingWidth
    {
        if !self.good {
            return RemainingWidth {
                width: 0,
                whole_string_covered: false,
                codepoints_count: self.codepoints_count,
            };
        }

        let run = cluster::width_run(&self.buf[.. self.len], self.width, self.state, true);

        self.width = run.width;
        self.codepoints_count += run.stop;

        RemainingWidth {
            width: self.width,
            whole_string_covered: run.stop == self.len,
            codepoints_count: self.codepoints_count,
        }
    }
}

impl CodepointSink for WidthDecrementerWithPos
{
    #[inline(always)]
    fn space(&self) -> usize
    {
        STAGING_LEN - self.len
    }

    #[inline(always)]
    fn good(&self) -> bool
    {
        self.good
    }

    #[inline(always)]
    fn push(&mut self, code: u32)
    {
        self.buf[self.len] = code;
        self.len += 1;
    }

    fn recycle(&mut self)
    {
        if self.good {
            let run = cluster::width_run(&self.buf[.. self.len], self.width, self.state, true);

            self.width = run.width;
            self.state = run.state;
            self.codepoints_count += run.stop;

            // лимит исчерпан строго внутри окна - продолжение не нужно.
            // исчерпание на границе окна не останавливает разбор: хвост
            // текущего кластера может идти следом
            if self.width == 0 && run.stop != self.len {
                self.good = false;
            }
        }

        self.len = 0;
    }
}
