//! Planning assumptions: conversion funnel rates and outreach cadence

mod funnel;

pub use funnel::FunnelAssumptions;
