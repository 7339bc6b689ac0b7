mod basic;
mod storage;
