mod sentinel;
